use anyhow::Context;
use clap::Parser;

use serverdash::cli::{Cli, Command};
use serverdash::config::Config;
use serverdash::gateway::HttpGateway;
use serverdash::{commands, logging, ui};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if matches!(cli.command, None | Some(Command::Ui)) {
        logging::init_tracing();
    } else {
        logging::init_stderr_tracing();
    }
    let config = load_config(&cli)?;

    match cli.command {
        None | Some(Command::Ui) => {
            tracing::info!(base_url = config.base_url(), "starting dashboard");
            ui::runtime::run(config)?;
        }
        Some(command) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?;
            let gateway = HttpGateway::new(config.base_url());
            let envelope = runtime.block_on(commands::execute(&gateway, command))?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    config.validate()?;
    Ok(config)
}
