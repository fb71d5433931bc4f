use crate::model::{Category, Event};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named line of a budget, e.g. "salary" or "rent", owning the events that make up its cash
/// flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub uuid: Uuid,
    pub name: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub events: Vec<Event>,
}

impl Item {
    pub fn new(name: impl Into<String>, events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            name: name.into(),
            active: true,
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreatePayload {
    pub group_uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_uuid: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdatePayload {
    pub uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_uuid: Option<Uuid>,
    pub name: String,
}
