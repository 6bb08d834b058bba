use crate::config::{self, ConfigManager};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub account_name: String,
    pub config: ConfigManager,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        config_file: &str,
        account_name: &str,
        json: bool,
        lock: bool,
    ) -> AppResult<Self> {
        let account_name = config::resolve_account_name(account_name);
        let config = ConfigManager::open(config_file)?.with_locking(lock);
        let output = Output::new(json);

        Ok(Self {
            account_name,
            config,
            output,
        })
    }
}
