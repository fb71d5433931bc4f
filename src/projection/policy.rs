//! Allocation of an event's amount into the month buckets of a year.

use crate::model::Event;
use crate::projection::monthly::MonthlyVector;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

/// One calendar month of a specific year, with its first and last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSpan {
    pub year: i32,
    /// 1-based, January is 1.
    pub month: u32,
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl MonthSpan {
    /// Returns `None` when `month` is not in `1..=12` or the month falls outside the range of
    /// dates that chrono can represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self {
            year,
            month,
            first,
            last,
        })
    }

    /// True when the inclusive range `start..=end` has at least one day in this month.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.last && end >= self.first
    }
}

/// Decides how much of an event's amount lands in a given month.
///
/// The amount returned is a magnitude. The debit/credit sign is applied by the caller.
pub trait MonthOverlapPolicy: Send + Sync {
    fn month_amount(&self, event: &Event, month: &MonthSpan) -> Decimal;
}

/// The full amount in every month the event touches, even by a single day, and zero otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullMonthOnOverlap;

impl MonthOverlapPolicy for FullMonthOnOverlap {
    fn month_amount(&self, event: &Event, month: &MonthSpan) -> Decimal {
        if month.overlaps(event.start_date, event.end_date) {
            event.amount
        } else {
            Decimal::ZERO
        }
    }
}

/// Allocates `event` across the twelve months of `year` using `policy`.
pub fn allocate_with(policy: &dyn MonthOverlapPolicy, year: i32, event: &Event) -> MonthlyVector {
    MonthlyVector::from_fn(|i| {
        // i < 12, so the month number fits
        let month = i as u32 + 1;
        match MonthSpan::new(year, month) {
            Some(span) => policy.month_amount(event, &span),
            None => Decimal::ZERO,
        }
    })
}

/// Allocates `event` across the months of `year` with [`FullMonthOnOverlap`].
pub fn allocate_event_to_year(year: i32, event: &Event) -> MonthlyVector {
    allocate_with(&FullMonthOnOverlap, year, event)
}
