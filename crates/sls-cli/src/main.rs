use anyhow::Context;
use clap::Parser;
use sls_store::service::SlsService;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod pages;
mod ui;
mod view;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(error) => {
            eprintln!("sls error: {error:#}");
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<pages::PageOutcome> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    let store = bootstrap::open_store(&config)?;
    let service = SlsService::new(store);

    commands::dispatch(cli.command, &service, &config, &flags)
        .await
        .context("failed to render page output")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SLS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
