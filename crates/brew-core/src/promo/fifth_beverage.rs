//! # "Every Nth Beverage Free" Promotion
//!
//! Every Nth beverage across the *combined* purchase history is free: the
//! count continues where previous paid sessions left off, so position 1 of
//! the current session is position `prior + 1` overall. Only positions
//! contributed by the current session can produce a discount.

use tracing::debug;

use crate::catalog::Product;
use crate::error::CoreResult;
use crate::money::Money;
use crate::order::Order;
use crate::promo::PromoRule;

/// How many beverages before a free one is given.
pub const FREE_BEVERAGE_INTERVAL: usize = 5;

/// The every-Nth-beverage-free rule.
///
/// The interval is configurable for tests; production uses
/// [`FREE_BEVERAGE_INTERVAL`].
#[derive(Debug, Clone)]
pub struct EveryNthBeverageFree {
    interval: usize,
}

impl EveryNthBeverageFree {
    pub fn new() -> Self {
        Self {
            interval: FREE_BEVERAGE_INTERVAL,
        }
    }

    pub fn with_interval(interval: usize) -> Self {
        assert!(interval > 0, "interval must be at least 1");
        Self { interval }
    }
}

impl Default for EveryNthBeverageFree {
    fn default() -> Self {
        Self::new()
    }
}

impl PromoRule for EveryNthBeverageFree {
    fn name(&self) -> &'static str {
        "every_nth_beverage_free"
    }

    /// Sums the prices of every current-session beverage that lands on a
    /// multiple-of-N position in the combined (prior + current) sequence,
    /// then applies the sum as one aggregate discount.
    fn apply(&mut self, order: &mut Order) -> CoreResult<()> {
        let prior_count = order
            .prior_paid_items()
            .iter()
            .filter(|p| p.is_beverage())
            .count();
        let current: Vec<&Product> = order.items().iter().filter(|p| p.is_beverage()).collect();

        if current.is_empty() {
            return Ok(());
        }
        let total = prior_count + current.len();
        if total < self.interval {
            return Ok(());
        }

        // Combined positions are 1-indexed; i is the 0-indexed slot. The
        // wrap-around index into `current` matches the persisted-counter
        // semantics the test suite encodes; do not "simplify" it.
        let mut discount = Money::zero();
        for i in prior_count..total {
            if (i + 1) % self.interval == 0 {
                discount += current[(i - prior_count) % current.len()].price();
            }
        }

        if !discount.is_zero() {
            debug!(rule = self.name(), %discount, prior_count, current = current.len(), "promotion matched");
        }
        order.apply_discount(discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
