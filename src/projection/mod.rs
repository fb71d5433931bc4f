//! Monthly cash-flow projection over the entity tree.
//!
//! Each event is allocated into the twelve months of a year by a [`MonthOverlapPolicy`]. An
//! item's total adds the allocation of its debit events and subtracts that of its credit events.
//! Groups and budgets sum their children.
pub mod monthly;
mod policy;
mod report;

pub use monthly::{add, subtract, MonthlyVector, MONTHS};
pub use policy::{
    allocate_event_to_year, allocate_with, FullMonthOnOverlap, MonthOverlapPolicy, MonthSpan,
};
pub use report::{project_budget, BudgetProjection, GroupProjection, ItemProjection, Row, RowKind};

use crate::model::{Budget, Group, Item};

impl Item {
    /// The net monthly cash flow of this item's events in `year`.
    pub fn monthly_total(&self, year: i32) -> MonthlyVector {
        self.monthly_total_with(&FullMonthOnOverlap, year)
    }

    /// The same as [`Item::monthly_total`] with a caller-chosen allocation policy.
    ///
    /// The debit and credit flags are checked separately, so an event with both set nets to zero
    /// and an event with neither contributes nothing.
    pub fn monthly_total_with(&self, policy: &dyn MonthOverlapPolicy, year: i32) -> MonthlyVector {
        let mut total = MonthlyVector::zero();
        for event in &self.events {
            let allocated = allocate_with(policy, year, event);
            if event.debit {
                total = add(&total, &allocated);
            }
            if event.credit {
                total = subtract(&total, &allocated);
            }
        }
        total
    }
}

impl Group {
    /// The sum of this group's item totals and, recursively, its sub-group totals.
    pub fn monthly_total(&self, year: i32) -> MonthlyVector {
        self.monthly_total_with(&FullMonthOnOverlap, year)
    }

    pub fn monthly_total_with(&self, policy: &dyn MonthOverlapPolicy, year: i32) -> MonthlyVector {
        let items: MonthlyVector = self
            .items
            .iter()
            .map(|item| item.monthly_total_with(policy, year))
            .sum();
        let groups: MonthlyVector = self
            .sub_groups
            .iter()
            .map(|group| group.monthly_total_with(policy, year))
            .sum();
        items + groups
    }
}

impl Budget {
    /// The sum of the totals of the budget's top-level groups.
    pub fn monthly_total(&self, year: i32) -> MonthlyVector {
        self.monthly_total_with(&FullMonthOnOverlap, year)
    }

    pub fn monthly_total_with(&self, policy: &dyn MonthOverlapPolicy, year: i32) -> MonthlyVector {
        self.groups
            .iter()
            .map(|group| group.monthly_total_with(policy, year))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn months(values: &[(usize, Decimal)]) -> MonthlyVector {
        let mut out = [Decimal::ZERO; MONTHS];
        for (ix, v) in values {
            out[*ix] = *v;
        }
        MonthlyVector::new(out)
    }

    fn five_in_march() -> Event {
        Event::debit(dec!(5), date(2021, 3, 12), date(2021, 3, 20))
    }

    fn three_march_to_april() -> Event {
        Event::debit(dec!(3), date(2021, 3, 12), date(2021, 4, 20))
    }

    fn flip(mut event: Event) -> Event {
        event.debit = !event.debit;
        event.credit = !event.credit;
        event
    }

    #[test]
    fn test_item_no_events() {
        let item = Item::new("empty", []);
        assert!(item.monthly_total(2021).is_zero());
        assert!(item.monthly_total(1999).is_zero());
    }

    #[test]
    fn test_item_single_debit() {
        let item = Item::new("gym", [five_in_march()]);
        assert_eq!(item.monthly_total(2021), months(&[(2, dec!(5))]));
    }

    #[test]
    fn test_item_single_credit() {
        let item = Item::new("gym", [flip(five_in_march())]);
        assert_eq!(item.monthly_total(2021), months(&[(2, dec!(-5))]));
    }

    #[test]
    fn test_item_two_debits() {
        let item = Item::new("gym", [five_in_march(), three_march_to_april()]);
        assert_eq!(
            item.monthly_total(2021),
            months(&[(2, dec!(8)), (3, dec!(3))])
        );
    }

    #[test]
    fn test_item_debit_and_credit() {
        let item = Item::new("gym", [five_in_march(), flip(three_march_to_april())]);
        assert_eq!(
            item.monthly_total(2021),
            months(&[(2, dec!(2)), (3, dec!(-3))])
        );
    }

    #[test]
    fn test_item_two_credits() {
        let item = Item::new(
            "gym",
            [flip(five_in_march()), flip(three_march_to_april())],
        );
        assert_eq!(
            item.monthly_total(2021),
            months(&[(2, dec!(-8)), (3, dec!(-3))])
        );
    }

    #[test]
    fn test_item_other_year() {
        let item = Item::new("gym", [five_in_march(), three_march_to_april()]);
        assert!(item.monthly_total(2020).is_zero());
        assert!(item.monthly_total(2022).is_zero());
    }

    #[test]
    fn test_both_flags_net_zero() {
        let mut ev = five_in_march();
        ev.credit = true;
        let item = Item::new("odd", [ev]);
        assert!(item.monthly_total(2021).is_zero());
    }

    #[test]
    fn test_neither_flag_contributes_nothing() {
        let mut ev = five_in_march();
        ev.debit = false;
        let item = Item::new("odd", [ev, three_march_to_april()]);
        assert_eq!(
            item.monthly_total(2021),
            months(&[(2, dec!(3)), (3, dec!(3))])
        );
    }

    #[test]
    fn test_event_order_irrelevant() {
        let a = Item::new("a", [five_in_march(), flip(three_march_to_april())]);
        let b = Item::new("b", [flip(three_march_to_april()), five_in_march()]);
        assert_eq!(a.monthly_total(2021), b.monthly_total(2021));
    }

    /// Puts the whole amount in the month the event starts, and nothing elsewhere.
    struct StartMonthOnly;

    impl MonthOverlapPolicy for StartMonthOnly {
        fn month_amount(&self, event: &Event, month: &MonthSpan) -> Decimal {
            if month.first <= event.start_date && event.start_date <= month.last {
                event.amount
            } else {
                Decimal::ZERO
            }
        }
    }

    #[test]
    fn test_custom_policy() {
        let item = Item::new("gym", [five_in_march(), three_march_to_april()]);
        assert_eq!(
            item.monthly_total_with(&StartMonthOnly, 2021),
            months(&[(2, dec!(8))])
        );
    }

    fn sample_budget() -> Budget {
        let salary = Item::new(
            "salary",
            [Event::debit(dec!(1000), date(2021, 1, 1), date(2021, 12, 31))],
        );
        let rent = Item::new(
            "rent",
            [Event::credit(dec!(400), date(2021, 1, 1), date(2021, 12, 31))],
        );
        let fuel = Item::new(
            "fuel",
            [Event::credit(dec!(60.5), date(2021, 6, 1), date(2021, 8, 31))],
        );
        let income = Group::new("income").with_items([salary]);
        let expenses = Group::new("expenses")
            .with_items([rent])
            .with_sub_groups([Group::new("car").with_items([fuel])]);
        Budget::new("home", [income, expenses])
    }

    #[test]
    fn test_group_total_includes_sub_groups() {
        let budget = sample_budget();
        let expenses = &budget.groups[1];
        let expected = expenses.items[0].monthly_total(2021)
            + expenses.sub_groups[0].items[0].monthly_total(2021);
        assert_eq!(expenses.monthly_total(2021), expected);
        assert_eq!(expenses.monthly_total(2021)[0], dec!(-400));
        assert_eq!(expenses.monthly_total(2021)[6], dec!(-460.5));
    }

    #[test]
    fn test_group_total_equals_sum_of_all_items() {
        let budget = sample_budget();
        let expenses = &budget.groups[1];
        let by_items: MonthlyVector = expenses
            .all_items()
            .into_iter()
            .map(|i| i.monthly_total(2021))
            .sum();
        assert_eq!(expenses.monthly_total(2021), by_items);
    }

    #[test]
    fn test_budget_total() {
        let budget = sample_budget();
        let total = budget.monthly_total(2021);
        assert_eq!(total[0], dec!(600));
        assert_eq!(total[5], dec!(539.5));
        assert_eq!(total[11], dec!(600));
        assert_eq!(total.total(), dec!(7018.5));
        assert!(budget.monthly_total(2022).is_zero());
    }

    #[test]
    fn test_empty_budget() {
        assert!(Budget::default().monthly_total(2021).is_zero());
    }
}
