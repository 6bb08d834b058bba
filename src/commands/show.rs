use crate::context::AppContext;
use crate::error::{AppError, AppResult};

pub fn run(ctx: &AppContext) -> AppResult<()> {
    match ctx.config.load_verify_account(&ctx.account_name) {
        Ok(account) => {
            let text = format!("{}: {account}", ctx.account_name);
            ctx.output.emit(&text, &account)
        }
        Err(err) if err.is_account_not_found() => Err(AppError::InvalidInput(format!(
            "idp account `{}` is not configured in {}. run `saml2aws configure --idp-account {}`",
            ctx.account_name,
            ctx.config.path().display(),
            ctx.account_name,
        ))),
        Err(err) => Err(err),
    }
}
