use crate::api::Client;
use crate::model::{Budget, BudgetCreatePayload, BudgetSetupPayload, BudgetUpdatePayload};
use crate::Result;
use anyhow::Context;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

impl Client {
    /// Lists every budget visible to the configured user.
    pub async fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.get("/budget/", &[], StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("budgets"))
            .context("Unable to get budgets")
    }

    /// Lists the budgets owned by the entity `entity_uuid`.
    pub async fn get_entity_budgets(&self, entity_uuid: Uuid) -> Result<Vec<Budget>> {
        self.get(&format!("/budget/entity/{entity_uuid}"), &[], StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("budgets"))
            .with_context(|| format!("Unable to get the budgets of entity {entity_uuid}"))
    }

    /// Fetches a budget with its full tree of groups, items and events.
    pub async fn get_budget(&self, uuid: Uuid) -> Result<Budget> {
        self.get(&format!("/budget/{uuid}"), &[], StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("budget"))
            .with_context(|| format!("Unable to get budget {uuid}"))
    }

    /// Creates a budget together with the service's default groups, item and category.
    pub async fn setup_budget(&self, payload: &BudgetSetupPayload) -> Result<Budget> {
        self.send(Method::POST, "/budget/setup", payload, StatusCode::CREATED)
            .await
            .and_then(|mut envelope| envelope.take("budget"))
            .with_context(|| format!("Unable to set up budget '{}'", payload.budget_name))
    }

    pub async fn create_budget(&self, payload: &BudgetCreatePayload) -> Result<Budget> {
        self.send(Method::POST, "/budget/", payload, StatusCode::CREATED)
            .await
            .and_then(|mut envelope| envelope.take("budget"))
            .with_context(|| format!("Unable to create budget '{}'", payload.name))
    }

    pub async fn update_budget(&self, payload: &BudgetUpdatePayload) -> Result<Budget> {
        let path = format!("/budget/{}", payload.uuid);
        self.send(Method::PUT, &path, payload, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("budget"))
            .with_context(|| format!("Unable to update budget {}", payload.uuid))
    }

    pub async fn delete_budget(&self, uuid: Uuid) -> Result<()> {
        self.delete(&format!("/budget/{uuid}"), StatusCode::OK)
            .await
            .with_context(|| format!("Unable to delete budget {uuid}"))
    }
}
