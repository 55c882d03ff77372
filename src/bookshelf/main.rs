use bookshelf::api::ShelfApi;
use bookshelf::config::ShelfConfig;
use bookshelf::error::Result;
use bookshelf::store::fs::FileStore;
use clap::Parser;
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod cli;

use args::Cli;
use cli::Console;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout belongs to the menu.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = ShelfConfig::load(&cwd)?
        .with_data_file(cli.data_file)
        .with_export_file(cli.export_file);
    config.validate()?;
    debug!(
        data_file = %config.data_file.display(),
        export_file = %config.export_file.display(),
        "starting"
    );

    let mut api = ShelfApi::open(FileStore::from_config(&config))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    cli::run_session(&mut api, &mut console)
}
