use std::io::{self, IsTerminal, Write};

use crate::cli::ConfigureArgs;
use crate::config::{DEFAULT_PROFILE, IdpAccount};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

pub fn run(ctx: &AppContext, args: ConfigureArgs) -> AppResult<()> {
    let mut account = ctx.config.load_account(&ctx.account_name)?;
    let prompt = !args.skip_prompt && io::stdin().is_terminal();
    apply_overrides(&mut account, args);

    if prompt {
        prompt_missing(ctx, &mut account)?;
    }

    ctx.config.save_account(&ctx.account_name, &account)?;

    let text = format!(
        "{}: saved to {}\n{account}",
        ctx.account_name,
        ctx.config.path().display()
    );
    ctx.output.emit(&text, &account)
}

fn apply_overrides(account: &mut IdpAccount, args: ConfigureArgs) {
    let ConfigureArgs {
        url,
        username,
        provider,
        mfa,
        skip_verify,
        timeout,
        aws_urn,
        session_duration,
        profile,
        app_id,
        subdomain,
        role_arn,
        skip_prompt: _,
    } = args;

    if let Some(url) = url {
        account.url = url;
    }
    if let Some(username) = username {
        account.username = username;
    }
    if let Some(provider) = provider {
        account.provider = provider;
    }
    if let Some(mfa) = mfa {
        account.mfa = mfa;
    }
    if let Some(skip_verify) = skip_verify {
        account.skip_verify = skip_verify;
    }
    if let Some(timeout) = timeout {
        account.timeout = timeout;
    }
    if let Some(aws_urn) = aws_urn {
        account.aws_urn = aws_urn;
    }
    if let Some(session_duration) = session_duration {
        account.session_duration = session_duration;
    }
    if let Some(profile) = profile {
        account.profile = profile;
    }
    if let Some(app_id) = app_id {
        account.app_id = app_id;
    }
    if let Some(subdomain) = subdomain {
        account.subdomain = subdomain;
    }
    if let Some(role_arn) = role_arn {
        account.role_arn = role_arn;
    }
}

fn prompt_missing(ctx: &AppContext, account: &mut IdpAccount) -> AppResult<()> {
    if account.validate().is_ok() {
        return Ok(());
    }

    println!("Configuring IDP account `{}`.", ctx.account_name);

    if account.provider.is_empty() {
        account.provider = prompt_required("Provider: ")?;
    }
    if account.mfa.is_empty() {
        account.mfa = prompt_with_default("MFA", "Auto")?;
    }
    if account.url.is_empty() {
        account.url = prompt_required("URL: ")?;
    }
    if account.username.is_empty() {
        account.username = prompt_line("Username (optional): ")?;
    }
    if account.is_onelogin() {
        if account.app_id.is_empty() {
            account.app_id = prompt_required("App ID: ")?;
        }
        if account.subdomain.is_empty() {
            account.subdomain = prompt_required("Subdomain: ")?;
        }
    }
    if account.profile.is_empty() {
        account.profile = prompt_with_default("AWS profile", DEFAULT_PROFILE)?;
    }

    Ok(())
}

fn prompt_with_default(label: &str, default: &str) -> AppResult<String> {
    let value = prompt_line(&format!("{label} [{default}]: "))?;
    if value.is_empty() {
        return Ok(default.to_string());
    }

    Ok(value)
}

fn prompt_required(prompt: &str) -> AppResult<String> {
    loop {
        let value = prompt_line(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        eprintln!("value is required");
    }
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}").map_err(AppError::io("unable to write prompt"))?;
    stdout
        .flush()
        .map_err(AppError::io("unable to write prompt"))?;

    let mut value = String::new();
    io::stdin()
        .read_line(&mut value)
        .map_err(AppError::io("unable to read input"))?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_provided_fields() {
        let mut account = IdpAccount {
            url: "https://old.example".to_string(),
            username: "alice".to_string(),
            ..IdpAccount::new()
        };

        apply_overrides(
            &mut account,
            ConfigureArgs {
                url: Some("https://new.example/sso".to_string()),
                session_duration: Some(7200),
                skip_verify: Some(true),
                ..ConfigureArgs::default()
            },
        );

        assert_eq!(account.url, "https://new.example/sso");
        assert_eq!(account.username, "alice");
        assert_eq!(account.session_duration, 7200);
        assert!(account.skip_verify);
        assert_eq!(account.profile, "saml");
    }
}
