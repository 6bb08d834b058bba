pub mod account;
pub mod account_name;
pub mod fields;
pub mod ini_writer;
pub mod paths;
pub mod store;

pub use account::{
    DEFAULT_AWS_URN, DEFAULT_PROFILE, DEFAULT_SESSION_DURATION, IdpAccount, ONELOGIN_PROVIDER,
};
pub use account_name::{DEFAULT_ACCOUNT_NAME, check_account_name, resolve_account_name};
pub use fields::AccountField;
pub use paths::{DEFAULT_CONFIG_PATH, expand_home, resolve_config_path};
pub use store::ConfigManager;
