//! # Payment Step
//!
//! Finalizes the transaction for a priced order. A real terminal would talk
//! to a payment provider here; the counter build charges cash and always
//! succeeds.

use brew_core::{Order, OrderStatus};
use tracing::info;

/// Cash payment collaborator: transitions the order to `Paid`.
#[derive(Debug, Default)]
pub struct CashPayment;

impl CashPayment {
    pub fn new() -> Self {
        Self
    }

    /// Charges the order's net total and marks it paid.
    pub fn process(&self, order: &mut Order) {
        info!(
            order_id = order.id(),
            amount = %order.net_total(),
            "transaction completed"
        );
        order.set_status(OrderStatus::Paid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{Money, Product, Tag};

    #[test]
    fn test_payment_marks_order_paid() {
        let item = Product::new("Small coffee", Money::from_cents(255), [Tag::Beverage]).unwrap();
        let mut order = Order::new(vec![item]).unwrap();

        CashPayment::new().process(&mut order);

        assert_eq!(order.status(), OrderStatus::Paid);
    }
}
