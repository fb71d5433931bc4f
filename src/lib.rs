//! A client for the budget service, plus a monthly cash-flow projection over its budgets.
//!
//! [`Client`] exposes one async function per remote operation. [`projection`] turns the events of
//! a budget tree into twelve monthly net amounts for a year, without any network access.

pub mod api;
pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod projection;
pub mod source;
mod utils;

pub use api::Client;
pub use config::{Config, ConfigFile};
pub use error::{Error, Result, ServiceError, StatusError};
pub use projection::{
    allocate_event_to_year, project_budget, BudgetProjection, FullMonthOnOverlap,
    MonthOverlapPolicy, MonthlyVector,
};
pub use source::{BudgetSource, StaticSource};
