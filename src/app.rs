use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        idp_account,
        json,
        lock,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(&config, &idp_account, json, lock)?;

    match command {
        Command::Configure(args) => commands::configure::run(&ctx, args),
        Command::Show => commands::show::run(&ctx),
        Command::List => commands::list::run(&ctx),
    }
}
