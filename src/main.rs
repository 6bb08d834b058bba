use clap::Parser;

fn main() {
    let cli = saml2aws::cli::Cli::parse();
    saml2aws::logging::init(cli.verbose);

    if let Err(err) = saml2aws::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
