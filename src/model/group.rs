use crate::model::Item;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A group of a budget, e.g. "income" or "expenses". Groups nest through `sub_groups` and hold
/// items directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub uuid: Uuid,
    pub name: String,
    pub active: bool,
    pub sub_groups: Vec<Group>,
    pub items: Vec<Item>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            ..Default::default()
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_sub_groups(mut self, groups: impl IntoIterator<Item = Group>) -> Self {
        self.sub_groups.extend(groups);
        self
    }

    /// Every item of this group and of its sub-groups, depth first.
    pub fn all_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        for group in &self.sub_groups {
            items.extend(group.all_items());
        }
        items
    }
}

/// The request body to create a group. A group belongs either to a budget directly or to a
/// parent group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCreatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUpdatePayload {
    pub uuid: Uuid,
    pub name: String,
}
