use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single financial movement belonging to an item: an amount, a debit/credit polarity, and the
/// date range over which it is active.
///
/// `debit` and `credit` are two independent flags as the service stores them. An event with both
/// set, or with neither, is representable. Aggregation treats each flag on its own, so such an
/// event nets to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub uuid: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub debit: bool,
    pub credit: bool,
    /// The magnitude of the event, non-negative by convention.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "crate::model::dates")]
    pub start_date: NaiveDate,
    #[serde(with = "crate::model::dates")]
    pub end_date: NaiveDate,
    pub active: bool,
}

impl Event {
    /// An active debit event of `amount` from `start_date` to `end_date`, inclusive.
    pub fn debit(amount: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            debit: true,
            amount,
            start_date,
            end_date,
            active: true,
            ..Default::default()
        }
    }

    /// An active credit event of `amount` from `start_date` to `end_date`, inclusive.
    pub fn credit(amount: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            credit: true,
            amount,
            start_date,
            end_date,
            active: true,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// The request body to create an event under an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCreate {
    pub item_uuid: Uuid,
    pub name: String,
    pub description: String,
    pub debit: bool,
    pub credit: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "crate::model::dates")]
    pub start_date: NaiveDate,
    #[serde(with = "crate::model::dates")]
    pub end_date: NaiveDate,
}

/// Updating an event sends the same body as creating one.
pub type EventUpdate = EventCreate;
