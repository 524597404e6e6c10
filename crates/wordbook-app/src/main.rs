use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbook_api::{FreeDictionaryApi, LookupService};
use wordbook_config::Config;
use wordbook_store::SqliteStore;

pub mod cli;
pub mod commands;
pub mod session;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::commands::handle_command;
use self::session::Session;

const DEFAULT_LOG_FILTER: &str = "wordbook=info";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(db) = &cli.db {
        config.storage.database_path = db.clone();
    }

    init_tracing(config.log_json);

    match run(cli, config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let report = error_report(&e);
            tracing::error!("{report}");
            eprintln!("{report}");
            ExitCode::FAILURE
        }
    }
}

/// One-line failure message including the whole context chain
fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<String> {
    tracing::debug!("Using {:?}", config);

    let store = SqliteStore::open(&config.storage.database_path).with_context(|| {
        format!(
            "Failed to open database {}",
            config.storage.database_path.display()
        )
    })?;
    let mut session = Session::load(store)?;

    let api = FreeDictionaryApi::new(&config.api)?;
    tracing::debug!("Remote lookups go to {}", api.base_url());

    handle_command(&mut session, Some(&api as &dyn LookupService), cli.command).await
}
