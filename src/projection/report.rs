use crate::model::{Budget, Group, Item};
use crate::projection::MonthlyVector;
use crate::source::BudgetSource;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// The projection of a whole budget for one year, keeping the shape of the budget tree so that
/// each group and item can be reported next to its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetProjection {
    pub budget_uuid: Uuid,
    pub name: String,
    pub year: i32,
    pub total: MonthlyVector,
    pub groups: Vec<GroupProjection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProjection {
    pub uuid: Uuid,
    pub name: String,
    pub total: MonthlyVector,
    pub items: Vec<ItemProjection>,
    pub sub_groups: Vec<GroupProjection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProjection {
    pub uuid: Uuid,
    pub name: String,
    pub total: MonthlyVector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Budget,
    Group,
    Item,
}

serde_plain::derive_display_from_serialize!(RowKind);

/// A flattened line of a [`BudgetProjection`], used for tabular output. `depth` is 0 for the
/// budget itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub kind: RowKind,
    pub depth: usize,
    pub uuid: Uuid,
    pub name: &'a str,
    pub monthly: &'a MonthlyVector,
}

impl BudgetProjection {
    pub fn new(budget: &Budget, year: i32) -> Self {
        let groups: Vec<GroupProjection> = budget
            .groups
            .iter()
            .map(|group| GroupProjection::new(group, year))
            .collect();
        let total = groups.iter().map(|g| &g.total).sum();
        Self {
            budget_uuid: budget.uuid,
            name: budget.name.clone(),
            year,
            total,
            groups,
        }
    }

    /// The budget row followed by every group and item, depth first, each group before its
    /// items and its items before its sub-groups.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = vec![Row {
            kind: RowKind::Budget,
            depth: 0,
            uuid: self.budget_uuid,
            name: &self.name,
            monthly: &self.total,
        }];
        for group in &self.groups {
            group.push_rows(1, &mut rows);
        }
        rows
    }
}

impl GroupProjection {
    pub fn new(group: &Group, year: i32) -> Self {
        let items: Vec<ItemProjection> = group
            .items
            .iter()
            .map(|item| ItemProjection::new(item, year))
            .collect();
        let sub_groups: Vec<GroupProjection> = group
            .sub_groups
            .iter()
            .map(|g| GroupProjection::new(g, year))
            .collect();
        let items_total: MonthlyVector = items.iter().map(|i| &i.total).sum();
        let groups_total: MonthlyVector = sub_groups.iter().map(|g| &g.total).sum();
        Self {
            uuid: group.uuid,
            name: group.name.clone(),
            total: items_total + groups_total,
            items,
            sub_groups,
        }
    }

    fn push_rows<'a>(&'a self, depth: usize, rows: &mut Vec<Row<'a>>) {
        rows.push(Row {
            kind: RowKind::Group,
            depth,
            uuid: self.uuid,
            name: &self.name,
            monthly: &self.total,
        });
        for item in &self.items {
            rows.push(Row {
                kind: RowKind::Item,
                depth: depth + 1,
                uuid: item.uuid,
                name: &item.name,
                monthly: &item.total,
            });
        }
        for group in &self.sub_groups {
            group.push_rows(depth + 1, rows);
        }
    }
}

impl ItemProjection {
    pub fn new(item: &Item, year: i32) -> Self {
        Self {
            uuid: item.uuid,
            name: item.name.clone(),
            total: item.monthly_total(year),
        }
    }
}

/// Fetches the budget tree for `uuid` from `source` and projects it for `year`.
pub async fn project_budget(
    source: &dyn BudgetSource,
    uuid: Uuid,
    year: i32,
) -> Result<BudgetProjection> {
    let budget = source
        .budget_tree(uuid)
        .await
        .with_context(|| format!("Unable to fetch budget {uuid} for projection"))?;
    debug!(
        "Projecting budget '{}' with {} top-level groups for {year}",
        budget.name,
        budget.groups.len()
    );
    Ok(BudgetProjection::new(&budget, year))
}
