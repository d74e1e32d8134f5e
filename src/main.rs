#[cfg(not(debug_assertions))]
use human_panic::setup_panic;

#[cfg(debug_assertions)]
extern crate better_panic;

use utils::app_config::AppConfig;
use utils::error::Result;

/// The main entry point of the application.
#[tokio::main]
async fn main() {
    // Human Panic. Only enabled when *not* debugging.
    #[cfg(not(debug_assertions))]
    {
        setup_panic!();
    }

    // Better Panic. Only enabled *when* debugging.
    #[cfg(debug_assertions)]
    {
        better_panic::Settings::debug()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .install();
    }

    // Typed errors from the lower layers become one user-visible message
    // and a non-zero exit here; nothing below this point prints and bails.
    if let Err(e) = run().await {
        eprintln!("ssacl: {}", e);
        std::process::exit(1);
    }
}

/// Configuration and logging come up before argument parsing so every
/// subcommand runs against the same environment.
async fn run() -> Result<()> {
    let config_contents = include_str!("resources/default_config.toml");
    AppConfig::init(Some(config_contents))?;

    let _guard = utils::logger::setup_logging()?;

    cli::cli_match().await
}
