use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// A single violated account rule. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("app ID empty in idp account")]
    AppIdEmpty,
    #[error("subdomain empty in idp account")]
    SubdomainEmpty,
    #[error("URL empty in idp account")]
    UrlEmpty,
    #[error("URL parse failed")]
    UrlParse,
    #[error("Provider empty in idp account")]
    ProviderEmpty,
    #[error("MFA empty in idp account")]
    MfaEmpty,
    #[error("Profile empty in idp account")]
    ProfileEmpty,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("account validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{context}: field `{field}`: {message}")]
    Serialization {
        context: &'static str,
        field: &'static str,
        message: String,
    },
    #[error("IDP account not found, run configure to set it up")]
    AccountNotFound,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Io { context, source }
    }

    pub fn is_account_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound)
    }
}

/// Reports whether `err` is the "account never configured" sentinel.
pub fn is_account_not_found(err: &AppError) -> bool {
    err.is_account_not_found()
}
