//! # Order Controller
//!
//! Thin orchestrator for one checkout:
//!
//! 1. ask the store for prior paid orders, flatten to the beverage list
//!    (a storage read failure degrades to "no history", it never aborts the
//!    sale)
//! 2. price the order through the processor (promotions applied exactly once)
//! 3. process payment
//! 4. on success only, append the finalized order to the history (a write
//!    failure is logged, not rolled back - the customer has already paid)
//! 5. hand the priced order to the receipt presenter line by line (also
//!    infallible post-payment; an unprintable row is logged and skipped)

use tracing::warn;

use brew_core::{CoreResult, Order, OrderProcessor, OrderStatus, Product};
use brew_store::OrderStore;

use crate::payment::CashPayment;
use crate::receipt::{Receipt, ReceiptPresenter, ReceiptRow};

pub struct OrderController<S: OrderStore, P: ReceiptPresenter> {
    processor: OrderProcessor,
    store: S,
    payment: CashPayment,
    presenter: P,
}

impl<S: OrderStore, P: ReceiptPresenter> OrderController<S, P> {
    pub fn new(processor: OrderProcessor, store: S, presenter: P) -> Self {
        Self {
            processor,
            store,
            payment: CashPayment::new(),
            presenter,
        }
    }

    /// Runs one complete checkout for the given selection.
    ///
    /// ## Errors
    /// Pricing and validation errors stop the transaction before payment.
    /// Storage errors never surface here; they are logged and degraded.
    pub fn checkout(&mut self, new_products: Vec<Product>) -> CoreResult<Order> {
        let prior_paid = self.load_prior_beverages();

        let mut order = self.processor.process_order(new_products, prior_paid)?;

        self.payment.process(&mut order);

        if order.status() == OrderStatus::Paid {
            if let Err(err) = self.store.store_orders(std::slice::from_ref(&order)) {
                warn!(%err, order_id = order.id(), "failed to store paid order");
            }
        }

        self.present_receipt(&order);
        Ok(order)
    }

    /// Prior-session beverages, reconstructed from the history store at the
    /// start of every checkout (never cached in process state).
    fn load_prior_beverages(&self) -> Vec<Product> {
        match self.store.retrieve_orders() {
            Ok(orders) => orders
                .iter()
                .flat_map(|order| order.items().iter())
                .filter(|p| p.is_beverage())
                .cloned()
                .collect(),
            Err(err) => {
                warn!(%err, "failed to load paid orders; continuing without history");
                Vec::new()
            }
        }
    }

    /// Builds and presents the receipt. The customer has already paid at this
    /// point, so the receipt path never fails the checkout: a row that cannot
    /// be rendered is logged and skipped, the totals still print.
    fn present_receipt(&mut self, order: &Order) {
        let mut receipt = Receipt::new();
        for product in order.items() {
            match ReceiptRow::new(product.name(), product.price()) {
                Ok(row) => receipt.add_row(row),
                Err(err) => {
                    warn!(%err, product = product.name(), "skipping unprintable receipt row")
                }
            }
        }
        receipt.set_total_cost(order.net_total());
        receipt.set_total_discount(order.total_discount());
        self.presenter.present(&receipt);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
