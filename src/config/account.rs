use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::{AppError, AppResult, ValidationError};

use super::fields::{AccountField, parse_bool};

/// URN used when authenticating to AWS with SAML. Only GovCloud needs another value.
pub const DEFAULT_AWS_URN: &str = "urn:amazon:webservices";
/// Session lifetime in seconds, can be raised in the IAM role settings.
pub const DEFAULT_SESSION_DURATION: i64 = 3600;
/// AWS CLI profile the credentials are written to.
pub const DEFAULT_PROFILE: &str = "saml";

/// Provider that additionally needs `app_id` and `subdomain`.
pub const ONELOGIN_PROVIDER: &str = "OneLogin";

const MAP_CONTEXT: &str = "unable to map account";

/// A named SAML identity provider account.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct IdpAccount {
    pub app_id: String,
    pub url: String,
    pub username: String,
    pub provider: String,
    pub mfa: String,
    pub skip_verify: bool,
    pub timeout: i64,
    pub aws_urn: String,
    pub session_duration: i64,
    pub profile: String,
    pub subdomain: String,
    pub role_arn: String,
}

impl Default for IdpAccount {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            url: String::new(),
            username: String::new(),
            provider: String::new(),
            mfa: String::new(),
            skip_verify: false,
            timeout: 0,
            aws_urn: DEFAULT_AWS_URN.to_string(),
            session_duration: DEFAULT_SESSION_DURATION,
            profile: DEFAULT_PROFILE.to_string(),
            subdomain: String::new(),
            role_arn: String::new(),
        }
    }
}

impl IdpAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_onelogin(&self) -> bool {
        self.provider == ONELOGIN_PROVIDER
    }

    /// Checks the required fields, reporting the first rule that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_onelogin() {
            if self.app_id.is_empty() {
                return Err(ValidationError::AppIdEmpty);
            }
            if self.subdomain.is_empty() {
                return Err(ValidationError::SubdomainEmpty);
            }
        }

        if self.url.is_empty() {
            return Err(ValidationError::UrlEmpty);
        }

        if Url::parse(&self.url).is_err() {
            return Err(ValidationError::UrlParse);
        }

        if self.provider.is_empty() {
            return Err(ValidationError::ProviderEmpty);
        }

        if self.mfa.is_empty() {
            return Err(ValidationError::MfaEmpty);
        }

        if self.profile.is_empty() {
            return Err(ValidationError::ProfileEmpty);
        }

        Ok(())
    }

    pub fn field_value(&self, field: AccountField) -> String {
        match field {
            AccountField::AppId => self.app_id.clone(),
            AccountField::Url => self.url.clone(),
            AccountField::Username => self.username.clone(),
            AccountField::Provider => self.provider.clone(),
            AccountField::Mfa => self.mfa.clone(),
            AccountField::SkipVerify => self.skip_verify.to_string(),
            AccountField::Timeout => self.timeout.to_string(),
            AccountField::AwsUrn => self.aws_urn.clone(),
            AccountField::SessionDuration => self.session_duration.to_string(),
            AccountField::Profile => self.profile.clone(),
            AccountField::Subdomain => self.subdomain.clone(),
            AccountField::RoleArn => self.role_arn.clone(),
        }
    }

    /// Sets a field from its stored text. A blank bool or integer keeps the current value.
    pub fn set_field(&mut self, field: AccountField, raw: &str) -> AppResult<()> {
        match field {
            AccountField::AppId => self.app_id = raw.to_string(),
            AccountField::Url => self.url = raw.to_string(),
            AccountField::Username => self.username = raw.to_string(),
            AccountField::Provider => self.provider = raw.to_string(),
            AccountField::Mfa => self.mfa = raw.to_string(),
            AccountField::SkipVerify => {
                if !raw.trim().is_empty() {
                    self.skip_verify = parse_bool(raw).ok_or_else(|| AppError::Serialization {
                        context: MAP_CONTEXT,
                        field: field.key(),
                        message: format!("invalid boolean `{raw}`"),
                    })?;
                }
            }
            AccountField::Timeout => {
                if let Some(value) = parse_int(field, raw)? {
                    self.timeout = value;
                }
            }
            AccountField::AwsUrn => self.aws_urn = raw.to_string(),
            AccountField::SessionDuration => {
                if let Some(value) = parse_int(field, raw)? {
                    self.session_duration = value;
                }
            }
            AccountField::Profile => self.profile = raw.to_string(),
            AccountField::Subdomain => self.subdomain = raw.to_string(),
            AccountField::RoleArn => self.role_arn = raw.to_string(),
        }

        Ok(())
    }
}

fn parse_int(field: AccountField, raw: &str) -> AppResult<Option<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|err| AppError::Serialization {
            context: MAP_CONTEXT,
            field: field.key(),
            message: format!("invalid integer `{raw}`: {err}"),
        })
}

impl fmt::Display for IdpAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "account {{")?;
        if self.is_onelogin() {
            writeln!(f, "  AppID: {}", self.app_id)?;
            writeln!(f, "  Subdomain: {}", self.subdomain)?;
        }
        writeln!(f, "  URL: {}", self.url)?;
        writeln!(f, "  Username: {}", self.username)?;
        writeln!(f, "  Provider: {}", self.provider)?;
        writeln!(f, "  MFA: {}", self.mfa)?;
        writeln!(f, "  SkipVerify: {}", self.skip_verify)?;
        writeln!(f, "  Timeout: {}", self.timeout)?;
        writeln!(f, "  AmazonWebservicesURN: {}", self.aws_urn)?;
        writeln!(f, "  SessionDuration: {}", self.session_duration)?;
        writeln!(f, "  Profile: {}", self.profile)?;
        writeln!(f, "  RoleARN: {}", self.role_arn)?;
        write!(f, "}}")
    }
}
