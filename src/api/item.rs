use crate::api::Client;
use crate::model::{Item, ItemCreatePayload, ItemUpdatePayload};
use crate::Result;
use anyhow::Context;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

impl Client {
    /// Lists the items of a group along with their events.
    pub async fn get_items(&self, group_uuid: Uuid) -> Result<Vec<Item>> {
        self.get(&format!("/group/{group_uuid}/items"), &[], StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("items"))
            .with_context(|| format!("Unable to get the items of group {group_uuid}"))
    }

    pub async fn create_item(&self, payload: &ItemCreatePayload) -> Result<Item> {
        self.send(Method::POST, "/item/", payload, StatusCode::CREATED)
            .await
            .and_then(|mut envelope| envelope.take("item"))
            .with_context(|| format!("Unable to create item '{}'", payload.name))
    }

    pub async fn update_item(&self, payload: &ItemUpdatePayload) -> Result<Item> {
        let path = format!("/item/{}", payload.uuid);
        self.send(Method::PUT, &path, payload, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("item"))
            .with_context(|| format!("Unable to update item {}", payload.uuid))
    }

    pub async fn delete_item(&self, uuid: Uuid) -> Result<()> {
        self.delete(&format!("/item/{uuid}"), StatusCode::OK)
            .await
            .with_context(|| format!("Unable to delete item {uuid}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ItemCreatePayload, ItemUpdatePayload};
    use crate::test::{errors_response, response, MockServer, NO_PERMISSION};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    const GROUP_UUID: &str = "b8448a78-6417-4fe2-849c-024622bc6106";
    const ITEM_UUID: &str = "2bd06946-c355-4198-8766-949149331e04";

    fn uuid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[tokio::test]
    async fn test_get_items() {
        let server = MockServer::start().await;
        server.push(
            200,
            response(
                "items found",
                r#"{"items": [
                    {
                        "uuid": "2bd06946-c355-4198-8766-949149331e04",
                        "name": "sold old items",
                        "events": [
                            {
                                "uuid": "c130f4d9-0124-4f0c-8129-298ae60cd9f1",
                                "name": "go pro",
                                "amount": 8000,
                                "debit": true,
                                "credit": false,
                                "start_date": "2023-03-12T00:00:00Z",
                                "end_date": "2023-03-12T00:00:00Z"
                            }
                        ]
                    },
                    {"uuid": "aaffec58-b471-4c58-a130-3ecc0cc09e01", "name": "bonus"}
                ]}"#,
            ),
        );
        let items = server.client().get_items(uuid(GROUP_UUID)).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].monthly_total(2023)[2], dec!(8000));
        assert!(items[1].events.is_empty());
        assert_eq!(
            server.last_request().uri,
            format!("/group/{GROUP_UUID}/items")
        );
    }

    #[tokio::test]
    async fn test_get_items_errors() {
        let server = MockServer::start().await;
        server.push(404, errors_response("items", "not found"));
        let err = server
            .client()
            .get_items(uuid(GROUP_UUID))
            .await
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "404: items: not found");
    }

    #[tokio::test]
    async fn test_create_item() {
        let server = MockServer::start().await;
        server.push(
            201,
            response(
                "item created",
                r#"{"item": {"uuid": "2bd06946-c355-4198-8766-949149331e04", "name": "rent"}}"#,
            ),
        );
        let payload = ItemCreatePayload {
            group_uuid: uuid(GROUP_UUID),
            category_uuid: None,
            name: "rent".to_string(),
        };
        let item = server.client().create_item(&payload).await.unwrap();
        assert_eq!(item.uuid, uuid(ITEM_UUID));
        let request = server.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.uri, "/item/");
        assert_eq!(request.json()["group_uuid"], GROUP_UUID);
    }

    #[tokio::test]
    async fn test_update_item_forbidden() {
        let server = MockServer::start().await;
        server.push(403, NO_PERMISSION);
        let payload = ItemUpdatePayload {
            uuid: uuid(ITEM_UUID),
            category_uuid: None,
            name: "rent".to_string(),
        };
        let err = server.client().update_item(&payload).await.unwrap_err();
        assert_eq!(err.root_cause().to_string(), "no permission");
        let request = server.last_request();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.uri, format!("/item/{ITEM_UUID}"));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let server = MockServer::start().await;
        server.push(200, response("item deleted", "{}"));
        server.client().delete_item(uuid(ITEM_UUID)).await.unwrap();
        let request = server.last_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.uri, format!("/item/{ITEM_UUID}"));
    }
}
