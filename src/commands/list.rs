use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let names = ctx.config.list_accounts()?;

    if ctx.output.mode() == OutputMode::Text {
        if names.is_empty() {
            println!("0 accounts in {}", ctx.config.path().display());
            return Ok(());
        }

        for name in &names {
            let marker = if *name == ctx.account_name { "*" } else { " " };
            println!("{marker} {name}");
        }

        return Ok(());
    }

    let text = format!("{} accounts", names.len());
    ctx.output.emit(&text, &names)
}
