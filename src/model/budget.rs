use crate::model::Group;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A budget owned by an entity (a user or an organisation). When fetched on its own the budget
/// carries its full tree of groups, items and events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub uuid: Uuid,
    pub entity_uuid: Uuid,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub groups: Vec<Group>,
}

impl Budget {
    pub fn new(name: impl Into<String>, groups: impl IntoIterator<Item = Group>) -> Self {
        Self {
            name: name.into(),
            active: true,
            groups: groups.into_iter().collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCreatePayload {
    pub entity_uuid: Uuid,
    pub name: String,
    pub description: String,
}

/// The request body for the service's one-shot budget setup, which creates the budget together
/// with its default groups, a default item and a default category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSetupPayload {
    pub entity_uuid: Uuid,
    pub budget_name: String,
    pub item_name: String,
    pub category_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUpdatePayload {
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
}
