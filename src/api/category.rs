use crate::api::Client;
use crate::model::{Category, CategoryCreatePayload, CategoryUpdatePayload};
use crate::Result;
use anyhow::Context;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

impl Client {
    /// Lists the categories of a budget. The budget is passed as the `budget_uuid` query value,
    /// which replaces any configured default for that key.
    pub async fn get_budget_categories(&self, budget_uuid: Uuid) -> Result<Vec<Category>> {
        let query = [("budget_uuid", budget_uuid.to_string())];
        self.get("/category/", &query, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("categories"))
            .with_context(|| format!("Unable to get the categories of budget {budget_uuid}"))
    }

    pub async fn create_category(&self, payload: &CategoryCreatePayload) -> Result<Category> {
        self.send(Method::POST, "/category/", payload, StatusCode::CREATED)
            .await
            .and_then(|mut envelope| envelope.take("category"))
            .with_context(|| format!("Unable to create category '{}'", payload.name))
    }

    pub async fn update_category(&self, payload: &CategoryUpdatePayload) -> Result<Category> {
        let path = format!("/category/{}", payload.uuid);
        self.send(Method::PUT, &path, payload, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("category"))
            .with_context(|| format!("Unable to update category {}", payload.uuid))
    }

    pub async fn delete_category(&self, uuid: Uuid) -> Result<()> {
        self.delete(&format!("/category/{uuid}"), StatusCode::OK)
            .await
            .with_context(|| format!("Unable to delete category {uuid}"))
    }
}
