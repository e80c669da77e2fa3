//! # brew-store: Order-History Persistence for Brew POS
//!
//! Owns the line-oriented history file that keeps the every-Nth-beverage
//! promotion continuous across program runs. Exposed to the core only as the
//! [`OrderStore`] trait: "fetch prior purchase records" and "persist a
//! finalized order".
//!
//! ## Failure Policy
//! Storage failures are typed ([`StoreError`]) and recoverable by the
//! controller: a read failure degrades to an empty history, a write failure
//! after payment is logged and ignored. The store itself never makes that
//! call; it just reports.

pub mod error;
pub mod history;

pub use error::{StoreError, StoreResult};
pub use history::{FileOrderStore, OrderStore};
