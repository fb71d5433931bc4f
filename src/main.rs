use budget_client::args::{Args, Command};
use budget_client::{commands, Client, Config, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config_path = args.common().config().path();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init(init_args) => commands::init(config_path, init_args).await?.print(),
        Command::Health => commands::health(&client(config_path).await?)
            .await?
            .print(),
        Command::Budgets(budgets_args) => {
            commands::budgets(&client(config_path).await?, budgets_args.entity())
                .await?
                .print()
        }
        Command::Show(show_args) => commands::show(&client(config_path).await?, show_args.uuid())
            .await?
            .print(),
        Command::Project(project_args) => commands::project(
            &client(config_path).await?,
            project_args.uuid(),
            project_args.year(),
            project_args.format(),
        )
        .await?
        .print(),
    };
    Ok(())
}

/// The config file wins when it exists, otherwise the `BUDGET_*` environment variables are used.
async fn client(config_path: &Path) -> Result<Client> {
    Client::new(Config::resolve(config_path).await?)
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => {
            // Without RUST_LOG only this crate logs, at the requested level.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                "budget_client",
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
