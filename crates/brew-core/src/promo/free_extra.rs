//! # "Free Extra With Beverage and Snack" Promotion
//!
//! Buy at least one beverage and one snack, and one of the extras in the
//! order is free. Which extra is picked uniformly at random among the
//! eligible ones. Absence of qualifying items is a normal order shape, not a
//! fault: the rule is a silent no-op then.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::Product;
use crate::error::CoreResult;
use crate::order::Order;
use crate::promo::PromoRule;

/// The free-extra rule.
///
/// Holds its own RNG so tests can seed the selection deterministically.
#[derive(Debug)]
pub struct FreeExtraWithBeverageAndSnack {
    rng: StdRng,
}

impl FreeExtraWithBeverageAndSnack {
    /// Entropy-seeded rule for production use.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic selection for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FreeExtraWithBeverageAndSnack {
    fn default() -> Self {
        Self::new()
    }
}

impl PromoRule for FreeExtraWithBeverageAndSnack {
    fn name(&self) -> &'static str {
        "free_extra_with_beverage_and_snack"
    }

    fn apply(&mut self, order: &mut Order) -> CoreResult<()> {
        let items = order.items();
        let has_beverage = items.iter().any(|p| p.is_beverage());
        let has_snack = items.iter().any(|p| p.is_snack());
        if !has_beverage || !has_snack {
            return Ok(());
        }

        let extras: Vec<&Product> = items.iter().filter(|p| p.is_extra()).collect();
        if extras.is_empty() {
            return Ok(());
        }

        let picked = extras[self.rng.gen_range(0..extras.len())];
        let discount = picked.price();
        debug!(rule = self.name(), extra = picked.name(), %discount, "promotion matched");
        order.apply_discount(discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tag;
    use crate::money::Money;

    fn coffee() -> Product {
        Product::new("Small coffee", Money::from_cents(255), [Tag::Beverage]).unwrap()
    }

    fn roll() -> Product {
        Product::new("Standard Bacon Roll", Money::from_cents(453), [Tag::Snack]).unwrap()
    }

    fn extra(name: &str, cents: i64) -> Product {
        Product::new(name, Money::from_cents(cents), [Tag::Extra]).unwrap()
    }

    #[test]
    fn test_single_extra_is_deterministic() {
        let mut order = Order::new(vec![coffee(), roll(), extra("Extra milk", 32)]).unwrap();

        FreeExtraWithBeverageAndSnack::from_seed(7)
            .apply(&mut order)
            .unwrap();

        assert_eq!(order.total_discount().cents(), 32);
    }

    #[test]
    fn test_no_snack_no_discount() {
        let mut order = Order::new(vec![coffee(), extra("Extra milk", 32)]).unwrap();

        FreeExtraWithBeverageAndSnack::from_seed(7)
            .apply(&mut order)
            .unwrap();

        assert_eq!(order.total_discount(), Money::zero());
    }

    #[test]
    fn test_no_beverage_no_discount() {
        let mut order = Order::new(vec![roll(), extra("Extra milk", 32)]).unwrap();

        FreeExtraWithBeverageAndSnack::from_seed(7)
            .apply(&mut order)
            .unwrap();

        assert_eq!(order.total_discount(), Money::zero());
    }

    #[test]
    fn test_no_extras_silent_no_op() {
        let mut order = Order::new(vec![coffee(), roll()]).unwrap();

        FreeExtraWithBeverageAndSnack::from_seed(7)
            .apply(&mut order)
            .unwrap();

        assert_eq!(order.total_discount(), Money::zero());
    }

    #[test]
    fn test_selection_is_some_eligible_extra() {
        // Multiple extras: the discount must equal one of their prices,
        // whichever the seeded RNG lands on.
        let prices = [32i64, 51, 95];
        let mut order = Order::new(vec![
            coffee(),
            roll(),
            extra("Extra milk", prices[0]),
            extra("Foamed milk", prices[1]),
            extra("Special roast coffee", prices[2]),
        ])
        .unwrap();

        FreeExtraWithBeverageAndSnack::from_seed(42)
            .apply(&mut order)
            .unwrap();

        assert!(prices.contains(&order.total_discount().cents()));
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let build = || {
            Order::new(vec![
                coffee(),
                roll(),
                extra("Extra milk", 32),
                extra("Foamed milk", 51),
                extra("Special roast coffee", 95),
            ])
            .unwrap()
        };

        let mut first = build();
        let mut second = build();
        FreeExtraWithBeverageAndSnack::from_seed(9)
            .apply(&mut first)
            .unwrap();
        FreeExtraWithBeverageAndSnack::from_seed(9)
            .apply(&mut second)
            .unwrap();

        assert_eq!(first.total_discount(), second.total_discount());
    }
}
