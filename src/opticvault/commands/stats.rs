use crate::model::Item;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::warn;

/// Aggregates shown on the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub count: usize,
    pub total_spend: Decimal,
}

impl Stats {
    pub fn total_spend_display(&self) -> String {
        format_price(self.total_spend)
    }
}

/// Exact decimal sum, so the total never drifts at display precision.
///
/// A total past `Decimal::MAX` saturates there instead of panicking.
pub fn compute_stats(items: &[Item]) -> Stats {
    let total_spend = items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.price))
        .unwrap_or_else(|| {
            warn!(count = items.len(), "total spend overflowed, saturating");
            Decimal::MAX
        });

    Stats {
        count: items.len(),
        total_spend,
    }
}

/// Render an amount as dollars with two decimals. Rounding happens here and
/// nowhere else.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}
