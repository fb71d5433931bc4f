//! Configuration of the budget service client.
//!
//! A `Config` is an immutable value holding the base URL of the budget service, optional
//! credentials, and any extra headers or query values that should go out with every request. It
//! can be built in code, read from the environment, or loaded from a JSON file, e.g.
//! `$CONFIG_DIR/budget/config.json`.

use crate::{utils, Result};
use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use tracing::debug;
use url::Url;

const APP_NAME: &str = "budget";
const CONFIG_VERSION: u8 = 1;
const DEFAULT_SCHEME: &str = "http";

pub const ENV_SCHEME: &str = "BUDGET_SERVICE_SCHEME";
pub const ENV_HOST: &str = "BUDGET_SERVICE_HOST";
pub const ENV_USER_TOKEN: &str = "BUDGET_USER_TOKEN";
pub const ENV_API_KEY: &str = "BUDGET_API_KEY";

/// Where and how to reach the budget service.
///
/// The base URL always ends with a `/` so that request paths join beneath it rather than
/// replacing its last segment.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Url,
    user_token: Option<String>,
    api_key: Option<String>,
    headers: BTreeMap<String, String>,
    query: Vec<(String, String)>,
}

impl Config {
    /// Creates a configuration for the service at `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid service URL '{base_url}'"))?;
        ensure!(
            !base_url.cannot_be_a_base(),
            "The service URL '{base_url}' cannot be used as a base URL"
        );
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            user_token: None,
            api_key: None,
            headers: BTreeMap::new(),
            query: Vec::new(),
        })
    }

    /// Creates a configuration from a scheme, e.g. `https`, and a host with optional port and
    /// path, e.g. `budget.example.com:8080`.
    pub fn from_url(scheme: &str, host: &str) -> Result<Self> {
        ensure!(!host.is_empty(), "The budget service host is empty");
        let scheme = if scheme.is_empty() {
            DEFAULT_SCHEME
        } else {
            scheme
        };
        Self::new(&format!("{scheme}://{host}"))
    }

    /// Reads `BUDGET_SERVICE_SCHEME` (default `http`), `BUDGET_SERVICE_HOST` (required),
    /// `BUDGET_USER_TOKEN` and `BUDGET_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with a caller-provided variable lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let scheme = get(ENV_SCHEME).unwrap_or_else(|| DEFAULT_SCHEME.to_string());
        let Some(host) = get(ENV_HOST) else {
            bail!("The environment variable {ENV_HOST} is not set");
        };
        let mut config = Self::from_url(&scheme, &host)?;
        config.user_token = get(ENV_USER_TOKEN);
        config.api_key = get(ENV_API_KEY);
        Ok(config)
    }

    /// Loads the configuration from a JSON config file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = ConfigFile::load(path).await?;
        file.into_config()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Loads the configuration file at `path` when it exists, otherwise reads the environment.
    pub async fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            debug!("Loading configuration from {}", path.display());
            Self::load(path).await
        } else {
            debug!(
                "No configuration file at {}, reading the environment",
                path.display()
            );
            Self::from_env()
        }
    }

    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Adds a header sent with every request, replacing any earlier value of the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a query value sent with every request. A query value passed by an individual
    /// operation replaces a default of the same key.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.query.retain(|(k, _)| *k != key);
        self.query.push((key, value.into()));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("user_token", &self.user_token.as_ref().map(|_| "<redacted>"))
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("query", &self.query)
            .finish()
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "budget",
///   "config_version": 1,
///   "scheme": "https",
///   "host": "budget.example.com",
///   "user_token": "f3b2c1",
///   "headers": { "X-Request-Source": "cli" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ConfigFile {
    /// Application name, should always be "budget"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    #[serde(default = "default_scheme")]
    scheme: String,

    /// Host of the budget service, with an optional port and path prefix
    host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,

    /// Extra headers sent with every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,

    /// Default query values sent with every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    query: BTreeMap<String, String>,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl ConfigFile {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            scheme: scheme.into(),
            host: host.into(),
            user_token: None,
            api_key: None,
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_user_token(mut self, token: Option<String>) -> Self {
        self.user_token = token;
        self
    }

    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it belongs to another app.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::read_json(path)
            .await
            .context("Unable to load the config file")?;

        ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        ensure!(
            config.config_version == CONFIG_VERSION,
            "Unsupported config_version {} in config file, expected {}",
            config.config_version,
            CONFIG_VERSION
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path, creating its directory when needed.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        utils::write_json(path.as_ref(), self)
            .await
            .context("Unable to write config file")
    }

    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::from_url(&self.scheme, &self.host)?;
        config.user_token = self.user_token.filter(|t| !t.is_empty());
        config.api_key = self.api_key.filter(|k| !k.is_empty());
        config.headers = self.headers;
        config.query = self.query.into_iter().collect();
        Ok(config)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
