//! # Order Aggregate
//!
//! The in-flight order: current items, prior-session beverage history,
//! running totals and lifecycle status.
//!
//! ## Lifecycle
//! ```text
//! Order::new(items)           status = Open, gross total computed
//!      │
//!      ▼
//! set_prior_paid_items()      attach beverage history (once, at build time)
//!      │
//!      ▼
//! apply_discount() x N        promotions accumulate total_discount
//!      │
//!      ▼
//! set_status(Paid)            payment step finalizes; content is immutable
//! ```
//!
//! ## Invariants
//! - `items` is never empty at construction
//! - `total_discount` only increases; a single application must be >= 0
//! - `prior_paid_items` holds only beverage records (filtered by the
//!   persistence gateway before reaching the core)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Product;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has been created but not yet finalized or paid.
    #[default]
    Open,
    /// Order has been paid.
    Paid,
    /// Order has been cancelled.
    Cancelled,
    /// Order has been completed and handed over.
    Completed,
}

// =============================================================================
// Order
// =============================================================================

/// A single checkout attempt.
///
/// The item list is owned by the order; callers move their selection in and
/// cannot mutate it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    id: String,

    /// The current session's selections, in arrival order.
    items: Vec<Product>,

    /// Beverages from previously completed, paid orders.
    prior_paid_items: Vec<Product>,

    status: OrderStatus,

    /// Sum of item prices before discount.
    gross_total: Money,

    /// Accumulated discount, monotonically non-decreasing.
    total_discount: Money,

    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new open order from a non-empty item list.
    ///
    /// The gross total is computed here and maintained on every `add_item`.
    pub fn new(items: Vec<Product>) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }
        let gross_total = items.iter().map(Product::price).sum();
        Ok(Order {
            id: Uuid::new_v4().to_string(),
            items,
            prior_paid_items: Vec::new(),
            status: OrderStatus::Open,
            gross_total,
            total_discount: Money::zero(),
            created_at: Utc::now(),
        })
    }

    /// Appends a product to the order.
    pub fn add_item(&mut self, product: Product) {
        self.gross_total += product.price();
        self.items.push(product);
    }

    /// Attaches the prior-session beverage history.
    ///
    /// Set once while the processor builds the order; read-only thereafter.
    pub fn set_prior_paid_items(&mut self, items: Vec<Product>) {
        self.prior_paid_items = items;
    }

    /// Applies a single non-negative discount, adding to the running total.
    ///
    /// ## Errors
    /// `CoreError::NegativeDiscount` for a negative amount; the order is
    /// left unchanged in that case.
    pub fn apply_discount(&mut self, discount: Money) -> CoreResult<()> {
        if discount.is_negative() {
            return Err(CoreError::NegativeDiscount(discount));
        }
        self.total_discount += discount;
        Ok(())
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[inline]
    pub fn prior_paid_items(&self) -> &[Product] {
        &self.prior_paid_items
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    #[inline]
    pub fn gross_total(&self) -> Money {
        self.gross_total
    }

    #[inline]
    pub fn total_discount(&self) -> Money {
        self.total_discount
    }

    /// Gross total minus accumulated discount.
    #[inline]
    pub fn net_total(&self) -> Money {
        self.gross_total - self.total_discount
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tag;

    fn coffee() -> Product {
        Product::new("Small coffee", Money::from_cents(255), [Tag::Beverage]).unwrap()
    }

    fn roll() -> Product {
        Product::new("Standard Bacon Roll", Money::from_cents(453), [Tag::Snack]).unwrap()
    }

    #[test]
    fn test_new_order_starts_open_with_gross_total() {
        let order = Order::new(vec![coffee(), roll()]).unwrap();

        assert_eq!(order.status(), OrderStatus::Open);
        assert_eq!(order.gross_total().cents(), 708);
        assert_eq!(order.total_discount(), Money::zero());
        assert_eq!(order.net_total().cents(), 708);
        assert!(order.prior_paid_items().is_empty());
        assert!(!order.id().is_empty());
    }

    #[test]
    fn test_empty_order_rejected() {
        let err = Order::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyOrder));
    }

    #[test]
    fn test_add_item_updates_gross_total() {
        let mut order = Order::new(vec![coffee()]).unwrap();
        order.add_item(roll());

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.gross_total().cents(), 708);
    }

    #[test]
    fn test_discounts_accumulate() {
        let mut order = Order::new(vec![coffee(), coffee()]).unwrap();

        order.apply_discount(Money::from_cents(100)).unwrap();
        order.apply_discount(Money::from_cents(55)).unwrap();

        assert_eq!(order.total_discount().cents(), 155);
        assert_eq!(order.net_total().cents(), 510 - 155);
    }

    #[test]
    fn test_negative_discount_rejected_and_state_unchanged() {
        let mut order = Order::new(vec![coffee()]).unwrap();
        order.apply_discount(Money::from_cents(50)).unwrap();

        let err = order.apply_discount(Money::from_cents(-10)).unwrap_err();
        assert!(matches!(err, CoreError::NegativeDiscount(_)));
        assert_eq!(order.total_discount().cents(), 50);
    }

    #[test]
    fn test_zero_discount_is_a_no_op() {
        let mut order = Order::new(vec![coffee()]).unwrap();
        order.apply_discount(Money::zero()).unwrap();
        assert_eq!(order.total_discount(), Money::zero());
    }

    #[test]
    fn test_status_transition() {
        let mut order = Order::new(vec![coffee()]).unwrap();
        order.set_status(OrderStatus::Paid);
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_prior_paid_items_attach() {
        let mut order = Order::new(vec![coffee()]).unwrap();
        order.set_prior_paid_items(vec![coffee(), coffee()]);
        assert_eq!(order.prior_paid_items().len(), 2);
    }
}
