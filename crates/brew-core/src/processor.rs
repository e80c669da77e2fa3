//! # Order Processor
//!
//! Orchestrates pricing: builds an [`Order`] from new + historical products,
//! computes the gross total, runs the promotion engine once, and hands back
//! the priced order.
//!
//! The processor never touches persistence or payment; the order it returns
//! is still `Open`.

use tracing::debug;

use crate::catalog::Product;
use crate::error::{CoreError, CoreResult};
use crate::order::Order;
use crate::promo::PromoEngine;

/// Prices orders through the promotion engine.
pub struct OrderProcessor {
    engine: PromoEngine,
}

impl OrderProcessor {
    pub fn new(engine: PromoEngine) -> Self {
        Self { engine }
    }

    /// Processes a checkout attempt into a fully priced open order.
    ///
    /// ## Errors
    /// - `CoreError::EmptyOrder` if `new_items` is empty
    /// - `CoreError::OrderProcessingFailed` wrapping any failure during
    ///   pricing; no half-discounted order escapes this call
    pub fn process_order(
        &mut self,
        new_items: Vec<Product>,
        prior_paid_items: Vec<Product>,
    ) -> CoreResult<Order> {
        if new_items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let mut order = Order::new(new_items)?;
        if !prior_paid_items.is_empty() {
            order.set_prior_paid_items(prior_paid_items);
        }

        self.engine
            .apply_all(&mut order)
            .map_err(|e| CoreError::OrderProcessingFailed(Box::new(e)))?;

        debug!(
            order_id = order.id(),
            gross = %order.gross_total(),
            discount = %order.total_discount(),
            net = %order.net_total(),
            "order priced"
        );
        Ok(order)
    }

    /// The underlying engine, for verification instrumentation.
    pub fn engine(&self) -> &PromoEngine {
        &self.engine
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
