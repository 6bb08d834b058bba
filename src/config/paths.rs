use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Configuration file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "~/.saml2aws";

const HOME_CONTEXT: &str = "unable to resolve home directory";

/// Expands a leading `~` to the current user's home directory.
pub fn expand_home(path: &str) -> AppResult<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    if !rest.is_empty() && !rest.starts_with(['/', std::path::MAIN_SEPARATOR]) {
        return Err(AppError::io(HOME_CONTEXT)(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot expand user-specific home dir in `{path}`"),
        )));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        AppError::io(HOME_CONTEXT)(io::Error::new(
            io::ErrorKind::NotFound,
            "home directory is not set",
        ))
    })?;

    let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);
    if rest.is_empty() {
        return Ok(home);
    }

    Ok(home.join(rest))
}

/// Resolves the configuration path, falling back to [`DEFAULT_CONFIG_PATH`].
pub fn resolve_config_path(requested: &str) -> AppResult<PathBuf> {
    if requested.is_empty() {
        return expand_home(DEFAULT_CONFIG_PATH);
    }

    expand_home(requested)
}

pub(crate) fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}
