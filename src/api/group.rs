use crate::api::Client;
use crate::model::{Group, GroupCreatePayload, GroupUpdatePayload};
use crate::Result;
use anyhow::Context;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

impl Client {
    /// Lists the top-level groups of a budget, with their sub-groups.
    pub async fn get_groups(&self, budget_uuid: Uuid) -> Result<Vec<Group>> {
        self.get(&format!("/budget/{budget_uuid}/groups"), &[], StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("groups"))
            .with_context(|| format!("Unable to get the groups of budget {budget_uuid}"))
    }

    pub async fn get_group(&self, uuid: Uuid) -> Result<Group> {
        self.get(&format!("/group/{uuid}"), &[], StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("group"))
            .with_context(|| format!("Unable to get group {uuid}"))
    }

    pub async fn create_group(&self, payload: &GroupCreatePayload) -> Result<Group> {
        self.send(Method::POST, "/group/", payload, StatusCode::CREATED)
            .await
            .and_then(|mut envelope| envelope.take("group"))
            .with_context(|| format!("Unable to create group '{}'", payload.name))
    }

    pub async fn update_group(&self, payload: &GroupUpdatePayload) -> Result<Group> {
        let path = format!("/group/{}", payload.uuid);
        self.send(Method::PUT, &path, payload, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("group"))
            .with_context(|| format!("Unable to update group {}", payload.uuid))
    }

    pub async fn delete_group(&self, uuid: Uuid) -> Result<()> {
        self.delete(&format!("/group/{uuid}"), StatusCode::OK)
            .await
            .with_context(|| format!("Unable to delete group {uuid}"))
    }
}
