//! sitegen binary entry point.

use sitegen::cli::errors::format_error_help;
use sitegen::cli::Cli;
use sitegen::config::SiteGenConfig;
use sitegen::error::SiteGenError;
use sitegen::provider::OpenAiProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();
    // load .env if present, ignore error
    let _ = dotenvy::dotenv();
    init_tracing(cli.log_filter());

    match run(&cli).await {
        Ok(path) => println!("{}", sitegen::app::confirmation(&path)),
        Err(e) => {
            eprintln!("Error: {}", format_error_help(&e));
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<std::path::PathBuf, SiteGenError> {
    let config = SiteGenConfig::from_env();
    let provider = OpenAiProvider::with_timeout(config.base_url().map(str::to_string), cli.timeout())?;
    sitegen::app::run(cli, &config, &provider).await
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
