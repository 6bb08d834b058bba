/// Storage keys for every persisted [`IdpAccount`](super::IdpAccount) field.
///
/// Both the load and the save path walk [`AccountField::ALL`], and the
/// account accessors match on it exhaustively, so adding a field without a
/// key fails to compile.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AccountField {
    AppId,
    Url,
    Username,
    Provider,
    Mfa,
    SkipVerify,
    Timeout,
    AwsUrn,
    SessionDuration,
    Profile,
    Subdomain,
    RoleArn,
}

impl AccountField {
    pub const ALL: [Self; 12] = [
        Self::AppId,
        Self::Url,
        Self::Username,
        Self::Provider,
        Self::Mfa,
        Self::SkipVerify,
        Self::Timeout,
        Self::AwsUrn,
        Self::SessionDuration,
        Self::Profile,
        Self::Subdomain,
        Self::RoleArn,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::AppId => "app_id",
            Self::Url => "url",
            Self::Username => "username",
            Self::Provider => "provider",
            Self::Mfa => "mfa",
            Self::SkipVerify => "skip_verify",
            Self::Timeout => "timeout",
            Self::AwsUrn => "aws_urn",
            Self::SessionDuration => "aws_session_duration",
            Self::Profile => "aws_profile",
            Self::Subdomain => "subdomain",
            Self::RoleArn => "role_arn",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" => Some(true),
        "0" | "f" | "false" | "n" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = AccountField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), AccountField::ALL.len());
    }

    #[test]
    fn resolves_fields_from_keys() {
        assert_eq!(
            AccountField::from_key("aws_session_duration"),
            Some(AccountField::SessionDuration)
        );
        assert_eq!(AccountField::from_key("aws_profile"), Some(AccountField::Profile));
        assert_eq!(AccountField::from_key("region"), None);
    }

    #[test]
    fn parses_loose_booleans() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" yes "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
