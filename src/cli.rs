use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "saml2aws",
    version,
    about = "Manage SAML identity provider accounts for AWS"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "SAML2AWS_CONFIGFILE",
        default_value = "",
        hide_default_value = true,
        help = "Path to the configuration file [default: ~/.saml2aws]"
    )]
    pub config: String,
    #[arg(
        short = 'a',
        long,
        global = true,
        env = "SAML2AWS_IDP_ACCOUNT",
        default_value = "default",
        help = "IDP account name to use"
    )]
    pub idp_account: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Hold an advisory lock on the configuration file while saving"
    )]
    pub lock: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create or update an IDP account
    Configure(ConfigureArgs),
    /// Show a configured IDP account
    Show,
    /// List configured IDP accounts
    List,
}

#[derive(Debug, Default, Args)]
pub struct ConfigureArgs {
    #[arg(long, help = "Identity provider URL")]
    pub url: Option<String>,
    #[arg(long, help = "Login name")]
    pub username: Option<String>,
    #[arg(long, help = "Identity provider type, e.g. ADFS, Ping, OneLogin")]
    pub provider: Option<String>,
    #[arg(long, help = "MFA mechanism")]
    pub mfa: Option<String>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", help = "Skip TLS certificate verification")]
    pub skip_verify: Option<bool>,
    #[arg(long, help = "Network timeout in seconds")]
    pub timeout: Option<i64>,
    #[arg(long, help = "AWS SAML audience URN")]
    pub aws_urn: Option<String>,
    #[arg(long, help = "AWS session duration in seconds")]
    pub session_duration: Option<i64>,
    #[arg(short = 'p', long, help = "AWS CLI profile to write credentials to")]
    pub profile: Option<String>,
    #[arg(long, help = "OneLogin application id")]
    pub app_id: Option<String>,
    #[arg(long, help = "OneLogin subdomain")]
    pub subdomain: Option<String>,
    #[arg(long, help = "AWS role ARN to assume")]
    pub role_arn: Option<String>,
    #[arg(long, help = "Never prompt for missing values")]
    pub skip_prompt: bool,
}
