mod action;

use clap::Parser;
use std::process::ExitCode;

#[derive(clap::Parser)]
#[clap(about, author, version)]
struct Args {
    /// Path to the configuration toml file, default to /etc/testrail/testrail.toml.
    #[clap(
        short,
        long,
        default_value = "/etc/testrail/testrail.toml",
        env = "TESTRAIL_CONFIG"
    )]
    pub config_path: String,
    #[clap(subcommand)]
    pub action: action::Action,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = match testrail::config::Configuration::from_path(&args.config_path) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("unable to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = testrail::init_logs(&config.log, true) {
        eprintln!("unable to initialize logs: {err}");
    }
    match args.action.execute(config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("command failed: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
