//! One handler per `budget` subcommand. Each returns an [`Out`] that `main` prints.

mod budgets;
mod health;
mod init;
mod project;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, info};

pub use budgets::{budgets, show};
pub use health::health;
pub use init::init;
pub use project::project;

/// A command's result. The status line goes to the log; the value and any rendered text are
/// optional.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    message: String,
    structure: Option<T>,
    #[serde(skip)]
    output: Option<String>,
}

impl<T, S> From<S> for Out<T>
where
    T: Serialize + Clone + Debug,
    S: Into<String>,
{
    fn from(message: S) -> Self {
        Out::new_message(message)
    }
}

/// How `budget project` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One row per budget, group and item with a column per month.
    #[default]
    Table,
    /// The projection tree as JSON.
    Json,
    /// The rows of the table as CSV.
    Csv,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    pub fn new(message: impl Into<String>, structure: T) -> Self {
        Self {
            structure: Some(structure),
            ..Self::new_message(message)
        }
    }

    /// A status line with nothing else attached.
    pub fn new_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            structure: None,
            output: None,
        }
    }

    pub fn with_output(self, output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            ..self
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Logs the status line at info and the structure as JSON at debug. Output goes to stdout so
    /// that it can be piped while the log stays on stderr.
    pub fn print(&self) {
        info!("{}", self.message);
        match self.structure.as_ref().map(serde_json::to_string_pretty) {
            Some(Ok(json)) => debug!("Result:\n{json}"),
            Some(Err(e)) => debug!("Unable to render the result as JSON: {e}"),
            None => {}
        }
        if let Some(output) = &self.output {
            println!("{output}");
        }
    }
}
