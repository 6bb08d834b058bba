pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;

use cli::Cli;
use error::AppResult;

pub use config::{ConfigManager, IdpAccount};
pub use error::{AppError, ValidationError, is_account_not_found};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
