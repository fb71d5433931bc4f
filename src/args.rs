//! These structs provide the CLI interface for the budget CLI.

use crate::commands::OutputFormat;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use uuid::Uuid;

/// budget: A command-line client for the budget service.
///
/// Lists and shows budgets held by the budget service, and projects the monthly cash flow of a
/// budget for a given year from the events of its items.
///
/// The service location is read from the config file (see `budget init`) or, when there is no
/// config file, from BUDGET_SERVICE_SCHEME, BUDGET_SERVICE_HOST, BUDGET_USER_TOKEN and
/// BUDGET_API_KEY.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a config file pointing at the budget service.
    Init(InitArgs),
    /// Check that the budget service is up.
    Health,
    /// List budgets, either all visible budgets or those of one entity.
    Budgets(BudgetsArgs),
    /// Fetch a budget with its groups, items and events and print it as JSON.
    Show(ShowArgs),
    /// Project the monthly cash flow of a budget for a year.
    Project(ProjectArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The path to the config file. Defaults to $CONFIG_DIR/budget/config.json
    #[arg(long, env = "BUDGET_CONFIG", default_value_t = default_config_path())]
    config: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, config: PathBuf) -> Self {
        Self {
            log_level,
            config: config.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> &DisplayPath {
        &self.config
    }
}

/// Args for the `budget init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The host of the budget service, with an optional port, e.g. budget.example.com:8080
    #[arg(long)]
    host: String,

    /// http or https
    #[arg(long, default_value = "http")]
    scheme: String,

    /// Stored in the config file and sent as X-User-Token
    #[arg(long)]
    user_token: Option<String>,

    /// Stored in the config file and sent as X-Api-Key
    #[arg(long)]
    api_key: Option<String>,

    /// Replace an existing config file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    pub fn new(host: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: scheme.into(),
            user_token: None,
            api_key: None,
            force: false,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Args for the `budget budgets` command.
#[derive(Debug, Parser, Clone)]
pub struct BudgetsArgs {
    /// Only list the budgets of this entity (user or organisation).
    #[arg(long)]
    entity: Option<Uuid>,
}

impl BudgetsArgs {
    pub fn new(entity: Option<Uuid>) -> Self {
        Self { entity }
    }

    pub fn entity(&self) -> Option<Uuid> {
        self.entity
    }
}

/// Args for the `budget show` command.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// The UUID of the budget.
    uuid: Uuid,
}

impl ShowArgs {
    pub fn new(uuid: Uuid) -> Self {
        Self { uuid }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

/// Args for the `budget project` command.
#[derive(Debug, Parser, Clone)]
pub struct ProjectArgs {
    /// The UUID of the budget.
    uuid: Uuid,

    /// The calendar year to project.
    #[arg(long)]
    year: i32,

    /// How to print the projection.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl ProjectArgs {
    pub fn new(uuid: Uuid, year: i32, format: OutputFormat) -> Self {
        Self { uuid, year, format }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

fn default_config_path() -> DisplayPath {
    DisplayPath(match dirs::config_dir() {
        Some(dir) => dir.join("budget").join("config.json"),
        None => {
            error!(
                "There was an error when trying to get your config directory. You can get around \
                this by providing --config or BUDGET_CONFIG instead of relying on the default \
                config path.",
            );
            PathBuf::from("budget.json")
        }
    })
}

/// A path clap can show as a default value in `--help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPath(PathBuf);

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for DisplayPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.into()))
    }
}
