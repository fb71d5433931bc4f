//! The HTTP client for the budget service.
//!
//! `Client` holds an immutable [`Config`] and a pooled `reqwest::Client`. Each resource of the
//! service (budgets, groups, items, categories, events) has its own module with an `impl Client`
//! block holding one async function per remote operation.

mod budget;
mod category;
mod envelope;
mod event;
mod group;
mod health;
mod item;

use crate::error::ServiceError;
use crate::{Config, Result};
use anyhow::Context;
use envelope::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

const USER_TOKEN_HEADER: &str = "x-user-token";
const API_KEY_HEADER: &str = "x-api-key";
const APPLICATION_JSON: &str = "application/json";

/// A client for the budget service.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let headers = default_headers(&config)?;
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Unable to build the HTTP client")?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Joins `path` onto the base URL and appends the configured default query values, with any
    /// key in `query` replacing the default of the same key.
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ServiceError> {
        let mut url = self.config.base_url().join(path.trim_start_matches('/'))?;
        let defaults = self
            .config
            .query()
            .iter()
            .filter(|(key, _)| !query.iter().any(|(k, _)| *k == key.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()));
        let pairs: Vec<(&str, &str)> = defaults
            .chain(query.iter().map(|(k, v)| (*k, v.as_str())))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        expect: StatusCode,
    ) -> Result<Envelope, ServiceError> {
        let url = self.url(path, query)?;
        let request = self.http.get(url).build()?;
        self.execute(request, expect).await
    }

    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expect: StatusCode,
    ) -> Result<Envelope, ServiceError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, &[])?;
        let request = self.http.request(method, url).json(body).build()?;
        self.execute(request, expect).await
    }

    pub(crate) async fn delete(&self, path: &str, expect: StatusCode) -> Result<(), ServiceError> {
        let url = self.url(path, &[])?;
        let request = self.http.delete(url).build()?;
        self.execute(request, expect).await.map(|_| ())
    }

    async fn execute(
        &self,
        request: reqwest::Request,
        expect: StatusCode,
    ) -> Result<Envelope, ServiceError> {
        let method = request.method().clone();
        let url = request.url().clone();
        if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
            trace!("Request body: {}", String::from_utf8_lossy(body));
        }
        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!("budget-service -> [ {method} {url} ] <- {}", status.as_u16());
        let body = response.bytes().await?;
        trace!("Response body: {}", String::from_utf8_lossy(&body));
        if status != expect {
            return Err(ServiceError::Status(envelope::status_error(status, &body)));
        }
        Envelope::parse(status, &body)
    }
}

fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    if let Some(token) = config.user_token() {
        headers.insert(USER_TOKEN_HEADER, sensitive(token, USER_TOKEN_HEADER)?);
    }
    if let Some(key) = config.api_key() {
        headers.insert(API_KEY_HEADER, sensitive(key, API_KEY_HEADER)?);
    }
    for (name, value) in config.headers() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("Invalid header name '{name}'"))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for header '{name}'"))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn sensitive(value: &str, name: &str) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(value).with_context(|| format!("Invalid value for header '{name}'"))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MockServer;

    #[test]
    fn test_url_joins_under_base_path() {
        let config = Config::new("http://localhost:8080/api").unwrap();
        let client = Client::new(config).unwrap();
        let url = client.url("/budget/", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/budget/");
        let url = client.url("/", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_url_query_override() {
        let config = Config::new("http://localhost")
            .unwrap()
            .with_query("budget_uuid", "default")
            .with_query("page", "2");
        let client = Client::new(config).unwrap();
        let url = client.url("category/", &[]).unwrap();
        assert_eq!(url.query(), Some("budget_uuid=default&page=2"));
        let url = client
            .url("category/", &[("budget_uuid", "abc".to_string())])
            .unwrap();
        assert_eq!(url.query(), Some("page=2&budget_uuid=abc"));
    }

    #[test]
    fn test_invalid_header_value() {
        let config = Config::new("http://localhost")
            .unwrap()
            .with_header("X-Bad", "line\nbreak");
        assert!(Client::new(config).is_err());
    }

    #[tokio::test]
    async fn test_request_headers() {
        let server = MockServer::start().await;
        server.push(200, r#"{"message":"ok","data":{}}"#);
        let config = server
            .config()
            .with_user_token("user-token")
            .with_api_key("api-key")
            .with_header("X-Request-Source", "tests");
        let client = Client::new(config).unwrap();
        assert!(client.health_check().await.unwrap());

        let request = server.last_request();
        assert_eq!(request.header("x-user-token"), Some("user-token"));
        assert_eq!(request.header("x-api-key"), Some("api-key"));
        assert_eq!(request.header("x-request-source"), Some("tests"));
        assert_eq!(request.header("content-type"), Some(APPLICATION_JSON));
    }

    #[tokio::test]
    async fn test_no_credential_headers_when_unset() {
        let server = MockServer::start().await;
        server.push(200, r#"{"message":"ok","data":{}}"#);
        server.client().health_check().await.unwrap();
        let request = server.last_request();
        assert_eq!(request.header("x-user-token"), None);
        assert_eq!(request.header("x-api-key"), None);
    }

    #[tokio::test]
    async fn test_transport_error() {
        // nothing listens on port 9 of localhost
        let client = Client::new(Config::new("http://127.0.0.1:9").unwrap()).unwrap();
        let err = client.health_check().await.unwrap_err();
        let service = err.downcast_ref::<ServiceError>().unwrap();
        assert!(matches!(service, ServiceError::Transport(_)));
    }
}
