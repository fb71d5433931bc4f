//! The `BudgetSource` trait: anything that can produce a full budget tree for projection.

use crate::api::Client;
use crate::model::Budget;
use crate::Result;
use anyhow::anyhow;
use std::collections::HashMap;
use tracing::trace;
use uuid::Uuid;

/// Produces the full tree of a budget (groups, sub-groups, items, events) by its UUID.
///
/// `Client` implements this against the budget service. `StaticSource` holds budgets in memory
/// for offline use and for tests.
#[async_trait::async_trait]
pub trait BudgetSource: Send + Sync {
    async fn budget_tree(&self, uuid: Uuid) -> Result<Budget>;
}

#[async_trait::async_trait]
impl BudgetSource for Client {
    async fn budget_tree(&self, uuid: Uuid) -> Result<Budget> {
        self.get_budget(uuid).await
    }
}

/// An in-memory `BudgetSource` keyed by budget UUID.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    budgets: HashMap<Uuid, Budget>,
}

impl StaticSource {
    pub fn new(budgets: impl IntoIterator<Item = Budget>) -> Self {
        let mut source = Self::default();
        for budget in budgets {
            source.insert(budget);
        }
        source
    }

    /// Adds `budget`, replacing any budget with the same UUID.
    pub fn insert(&mut self, budget: Budget) -> Option<Budget> {
        self.budgets.insert(budget.uuid, budget)
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

#[async_trait::async_trait]
impl BudgetSource for StaticSource {
    async fn budget_tree(&self, uuid: Uuid) -> Result<Budget> {
        trace!("Looking up budget {uuid} in a static source");
        self.budgets
            .get(&uuid)
            .cloned()
            .ok_or_else(|| anyhow!("Budget {uuid} not found"))
    }
}
