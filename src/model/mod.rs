//! Types that represent the budget service's data model: `Budget`, `Group`, `Item`, `Category`
//! and `Event`, along with the payloads used to create and update them.
mod budget;
mod category;
pub mod dates;
mod event;
mod group;
mod item;

pub use budget::{Budget, BudgetCreatePayload, BudgetSetupPayload, BudgetUpdatePayload};
pub use category::{Category, CategoryCreatePayload, CategoryUpdatePayload};
pub use event::{Event, EventCreate, EventUpdate};
pub use group::{Group, GroupCreatePayload, GroupUpdatePayload};
pub use item::{Item, ItemCreatePayload, ItemUpdatePayload};
