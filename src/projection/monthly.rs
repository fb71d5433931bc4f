//! The `MonthlyVector` value type: one amount per calendar month of a year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Index, Sub};

/// The number of months in a year, and so the length of every `MonthlyVector`.
pub const MONTHS: usize = 12;

/// Twelve amounts for the months of a year; index 0 is January and index 11 is December.
///
/// This is a plain value. Addition and subtraction return new vectors and never mutate their
/// operands.
///
/// ```
/// # use budget_client::projection::MonthlyVector;
/// # use rust_decimal::Decimal;
/// let x = MonthlyVector::from_fn(|i| Decimal::from(i));
/// let y = MonthlyVector::splat(Decimal::ONE);
/// assert_eq!((x + y) - y, x);
/// assert_eq!((x + y)[11], Decimal::from(12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyVector([Decimal; MONTHS]);

impl MonthlyVector {
    pub const fn new(values: [Decimal; MONTHS]) -> Self {
        Self(values)
    }

    /// The all-zero vector.
    pub const fn zero() -> Self {
        Self([Decimal::ZERO; MONTHS])
    }

    /// The same `value` in every month.
    pub const fn splat(value: Decimal) -> Self {
        Self([value; MONTHS])
    }

    /// Builds a vector by calling `f` with each month index, `0..12`.
    pub fn from_fn(f: impl FnMut(usize) -> Decimal) -> Self {
        Self(std::array::from_fn(f))
    }

    pub fn values(&self) -> &[Decimal; MONTHS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decimal> {
        self.0.iter()
    }

    /// The amount for a 1-based `month` number, or `None` outside `1..=12`.
    pub fn month(&self, month: u32) -> Option<Decimal> {
        let ix = usize::try_from(month).ok()?.checked_sub(1)?;
        self.0.get(ix).copied()
    }

    /// The sum of all twelve months.
    pub fn total(&self) -> Decimal {
        self.0.iter().copied().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Decimal::is_zero)
    }
}

/// Element-wise addition: `add(x, y)[i] == x[i] + y[i]`.
pub fn add(x: &MonthlyVector, y: &MonthlyVector) -> MonthlyVector {
    MonthlyVector::from_fn(|i| x.0[i] + y.0[i])
}

/// Element-wise subtraction: `subtract(x, y)[i] == x[i] - y[i]`.
pub fn subtract(x: &MonthlyVector, y: &MonthlyVector) -> MonthlyVector {
    MonthlyVector::from_fn(|i| x.0[i] - y.0[i])
}

impl Add for MonthlyVector {
    type Output = MonthlyVector;

    fn add(self, rhs: Self) -> Self::Output {
        add(&self, &rhs)
    }
}

impl Sub for MonthlyVector {
    type Output = MonthlyVector;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(&self, &rhs)
    }
}

impl Sum for MonthlyVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MonthlyVector::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a MonthlyVector> for MonthlyVector {
    fn sum<I: Iterator<Item = &'a MonthlyVector>>(iter: I) -> Self {
        iter.fold(MonthlyVector::zero(), |acc, v| add(&acc, v))
    }
}

impl Index<usize> for MonthlyVector {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[Decimal; MONTHS]> for MonthlyVector {
    fn from(values: [Decimal; MONTHS]) -> Self {
        Self(values)
    }
}

impl From<MonthlyVector> for [Decimal; MONTHS] {
    fn from(v: MonthlyVector) -> Self {
        v.0
    }
}

impl Display for MonthlyVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.0.iter().map(|v| v.normalize().to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}
