use crate::api::Client;
use crate::model::{Event, EventCreate, EventUpdate};
use crate::Result;
use anyhow::Context;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

impl Client {
    /// Creates an event under the item `payload.item_uuid`. The service answers `200 OK` for
    /// this call rather than `201 Created`.
    pub async fn create_event(&self, payload: &EventCreate) -> Result<Event> {
        self.send(Method::POST, "/event", payload, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("event"))
            .with_context(|| format!("Unable to create event '{}'", payload.name))
    }

    pub async fn update_event(&self, uuid: Uuid, payload: &EventUpdate) -> Result<Event> {
        self.send(Method::PUT, &format!("/event/{uuid}"), payload, StatusCode::OK)
            .await
            .and_then(|mut envelope| envelope.take("event"))
            .with_context(|| format!("Unable to update event {uuid}"))
    }

    pub async fn delete_event(&self, uuid: Uuid) -> Result<()> {
        self.delete(&format!("/event/{uuid}"), StatusCode::OK)
            .await
            .with_context(|| format!("Unable to delete event {uuid}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::EventCreate;
    use crate::test::{errors_response, response, MockServer, NO_PERMISSION};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    const EVENT_UUID: &str = "b86768ee-69de-4fb2-81eb-ab96d14e37ae";

    fn uuid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    fn payload() -> EventCreate {
        EventCreate {
            item_uuid: uuid("2bd06946-c355-4198-8766-949149331e04"),
            name: "test event three".to_string(),
            description: String::new(),
            debit: true,
            credit: false,
            amount: dec!(12.19),
            start_date: NaiveDate::from_ymd_opt(2021, 11, 18).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2021, 11, 19).unwrap(),
        }
    }

    fn event_response() -> String {
        response(
            "event created",
            r#"{"event": {
                "uuid": "b86768ee-69de-4fb2-81eb-ab96d14e37ae",
                "name": "test event three",
                "amount": 12.19,
                "debit": true,
                "credit": false,
                "start_date": "2021-11-18T00:00:00Z",
                "end_date": "2021-11-19T00:00:00Z",
                "active": true
            }}"#,
        )
    }

    #[tokio::test]
    async fn test_create_event() {
        let server = MockServer::start().await;
        server.push(200, event_response());
        let event = server.client().create_event(&payload()).await.unwrap();
        assert_eq!(event.uuid, uuid(EVENT_UUID));
        assert_eq!(event.amount, dec!(12.19));
        assert_eq!(event.end_date, NaiveDate::from_ymd_opt(2021, 11, 19).unwrap());

        let request = server.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.uri, "/event");
        let body = request.json();
        assert_eq!(body["amount"], 12.19);
        assert_eq!(body["start_date"], "2021-11-18T00:00:00Z");
        assert_eq!(body["item_uuid"], "2bd06946-c355-4198-8766-949149331e04");
    }

    #[tokio::test]
    async fn test_create_event_errors() {
        let server = MockServer::start().await;
        server.push(
            400,
            errors_response("item_uuid", "item does not exist"),
        );
        let err = server.client().create_event(&payload()).await.unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "400: item_uuid: item does not exist"
        );
    }

    #[tokio::test]
    async fn test_update_event() {
        let server = MockServer::start().await;
        server.push(403, NO_PERMISSION);
        server.push(200, event_response());
        let client = server.client();
        let err = client
            .update_event(uuid(EVENT_UUID), &payload())
            .await
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "no permission");
        let event = client
            .update_event(uuid(EVENT_UUID), &payload())
            .await
            .unwrap();
        assert!(event.debit);
        let request = server.last_request();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.uri, format!("/event/{EVENT_UUID}"));
    }

    #[tokio::test]
    async fn test_delete_event() {
        let server = MockServer::start().await;
        server.push(200, response("event deleted", "{}"));
        server.push(404, r#"{"detail": "Event not found"}"#);
        let client = server.client();
        client.delete_event(uuid(EVENT_UUID)).await.unwrap();
        assert_eq!(server.last_request().method, "DELETE");
        assert_eq!(server.last_request().uri, format!("/event/{EVENT_UUID}"));
        let err = client.delete_event(uuid(EVENT_UUID)).await.unwrap_err();
        assert_eq!(err.root_cause().to_string(), "event not found");
    }
}
