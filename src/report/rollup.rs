//! Nil-safe decimal rollups.
//!
//! A missing cost means "not applicable", which is different from zero. A
//! total stays `None` until at least one source contributes a value.

use rust_decimal::Decimal;

/// Add two optional amounts; `None` only when both are `None`.
///
/// Sums past the decimal range saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn sum_optional(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    match (a, b) {
        (None, None) => None,
        (Some(x), None) | (None, Some(x)) => Some(x),
        (Some(x), Some(y)) => Some(x.saturating_add(y)),
    }
}

/// Fold a sequence of optional amounts with [`sum_optional`].
pub fn sum_all<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    amounts.into_iter().fold(None, sum_optional)
}

/// Running hourly and monthly totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostTotals {
    pub hourly: Option<Decimal>,
    pub monthly: Option<Decimal>,
}

impl CostTotals {
    pub fn add(&mut self, hourly: Option<Decimal>, monthly: Option<Decimal>) {
        self.hourly = sum_optional(self.hourly, hourly);
        self.monthly = sum_optional(self.monthly, monthly);
    }
}
