use crate::error::{AppError, AppResult};

pub const DEFAULT_ACCOUNT_NAME: &str = "default";

pub fn resolve_account_name(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return DEFAULT_ACCOUNT_NAME.to_string();
    }

    trimmed.to_string()
}

/// Rejects names that would not read back as the same INI section header.
pub fn check_account_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::InvalidInput(
            "idp account name is empty".to_string(),
        ));
    }

    if name.trim() != name {
        return Err(AppError::InvalidInput(format!(
            "idp account name `{name}` has leading or trailing whitespace"
        )));
    }

    if let Some(c) = name
        .chars()
        .find(|c| matches!(c, '[' | ']' | '\\') || c.is_control())
    {
        return Err(AppError::InvalidInput(format!(
            "idp account name `{}` contains unsupported character {c:?}",
            name.escape_debug()
        )));
    }

    Ok(())
}
