use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A category that items of a budget can be filed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub uuid: Uuid,
    pub name: String,
    /// Whether this is the budget's default category.
    pub norm: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreatePayload {
    pub budget_uuid: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdatePayload {
    pub uuid: Uuid,
    pub name: String,
}
