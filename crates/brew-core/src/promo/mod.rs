//! # Promotion Engine
//!
//! A chain of independently pluggable promotion rules applied to an order.
//!
//! ## Composition Contract
//! Every rule re-derives its own basis from `order.items()` and
//! `order.prior_paid_items()`, never from `total_discount` or another rule's
//! effect. Each application adds a non-negative discount, so registration
//! order does not change the outcome.
//!
//! ## Non-Idempotence
//! `apply_all` always adds; running the engine twice on the same order
//! double-counts the discount. The controller calls it exactly once per
//! checkout.

mod fifth_beverage;
mod free_extra;

pub use fifth_beverage::{EveryNthBeverageFree, FREE_BEVERAGE_INTERVAL};
pub use free_extra::FreeExtraWithBeverageAndSnack;

use crate::error::CoreResult;
use crate::order::Order;

// =============================================================================
// Promotion Rule
// =============================================================================

/// A promotion rule: computes a non-negative discount from order + history
/// state and applies it to the order's discount accumulator.
pub trait PromoRule {
    /// Stable rule name, used in log events.
    fn name(&self) -> &'static str;

    /// Applies the rule once. Absence of qualifying items is a silent no-op,
    /// not an error.
    fn apply(&mut self, order: &mut Order) -> CoreResult<()>;
}

// =============================================================================
// Promotion Engine
// =============================================================================

/// Holds the ordered set of registered rules and applies all of them.
#[derive(Default)]
pub struct PromoEngine {
    rules: Vec<Box<dyn PromoRule>>,
    applied: bool,
}

impl PromoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule; registration order is application order.
    pub fn register(&mut self, rule: Box<dyn PromoRule>) {
        self.rules.push(rule);
    }

    /// Invokes every registered rule once against the order.
    pub fn apply_all(&mut self, order: &mut Order) -> CoreResult<()> {
        for rule in &mut self.rules {
            rule.apply(order)?;
        }
        self.applied = true;
        Ok(())
    }

    /// Whether at least one `apply_all` has run.
    ///
    /// Verification instrumentation for tests and ops checks; business logic
    /// never reads this.
    pub fn has_applied(&self) -> bool {
        self.applied
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
