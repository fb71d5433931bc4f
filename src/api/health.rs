use crate::api::Client;
use crate::Result;
use anyhow::Context;
use reqwest::StatusCode;

impl Client {
    /// Asks the service whether it is up. Returns `true` when it answers `200 OK`.
    pub async fn health_check(&self) -> Result<bool> {
        self.get("/", &[], StatusCode::OK)
            .await
            .context("The budget service health check failed")?;
        Ok(true)
    }
}
