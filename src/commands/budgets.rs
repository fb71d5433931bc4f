use crate::commands::Out;
use crate::model::Budget;
use crate::{Client, Result};
use anyhow::Context;
use uuid::Uuid;

/// Lists the budgets visible to the configured user, or only those of `entity`.
pub async fn budgets(client: &Client, entity: Option<Uuid>) -> Result<Out<Vec<Budget>>> {
    let budgets = match entity {
        Some(entity) => client.get_entity_budgets(entity).await?,
        None => client.get_budgets().await?,
    };
    let listing = budgets
        .iter()
        .map(|b| format!("{}  {}", b.uuid, b.name))
        .collect::<Vec<_>>()
        .join("\n");
    let message = format!("Found {} budgets", budgets.len());
    Ok(Out::new(message, budgets).with_output(listing))
}

/// Fetches the full tree of budget `uuid` and renders it as JSON.
pub async fn show(client: &Client, uuid: Uuid) -> Result<Out<Budget>> {
    let budget = client.get_budget(uuid).await?;
    let json = serde_json::to_string_pretty(&budget).context("Unable to serialize the budget")?;
    let message = format!(
        "Budget '{}' has {} top-level groups",
        budget.name,
        budget.groups.len()
    );
    Ok(Out::new(message, budget).with_output(json))
}
