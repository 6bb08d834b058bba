mod cli {
    pub use saml2aws::cli::*;
}

mod config {
    pub use saml2aws::config::*;
}

mod context {
    pub use saml2aws::context::*;
}

mod error {
    pub use saml2aws::error::*;
}

mod configure_under_test {
    #![allow(dead_code)]

    include!("../src/commands/configure.rs");

    #[test]
    fn empty_overrides_keep_loaded_account() {
        let loaded = IdpAccount {
            url: "https://idp.example.com/sso".to_string(),
            provider: "Ping".to_string(),
            mfa: "Auto".to_string(),
            role_arn: "arn:aws:iam::123456789012:role/Dev".to_string(),
            ..IdpAccount::new()
        };

        let mut account = loaded.clone();
        apply_overrides(&mut account, ConfigureArgs::default());
        assert_eq!(account, loaded);
    }

    #[test]
    fn overrides_onelogin_fields() {
        let mut account = IdpAccount::new();
        apply_overrides(
            &mut account,
            ConfigureArgs {
                provider: Some("OneLogin".to_string()),
                app_id: Some("123456".to_string()),
                subdomain: Some("acme".to_string()),
                ..ConfigureArgs::default()
            },
        );

        assert!(account.is_onelogin());
        assert_eq!(account.app_id, "123456");
        assert_eq!(account.subdomain, "acme");
    }
}
