use crate::commands::Out;
use crate::{Client, Result};

/// Asks the budget service whether it is up.
pub async fn health(client: &Client) -> Result<Out<()>> {
    client.health_check().await?;
    Ok(format!("The budget service at {} is up", client.config().base_url()).into())
}
