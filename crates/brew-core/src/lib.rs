//! # brew-core: Pure Business Logic for Brew POS
//!
//! This crate is the heart of Brew POS: the order-and-promotions pipeline as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     apps/counter (CLI)                      │
//! │   menu loop ──► controller ──► payment ──► receipt          │
//! └───────────────┬───────────────────────────┬─────────────────┘
//!                 │                           │
//! ┌───────────────▼─────────────────┐ ┌───────▼─────────────────┐
//! │   ★ brew-core (THIS CRATE) ★    │ │       brew-store        │
//! │                                 │ │                         │
//! │  catalog  money  order          │ │  order-history file     │
//! │  promo engine + rules           │ │  (beverages only)       │
//! │  order processor                │ │                         │
//! │                                 │ │                         │
//! │  NO I/O • PURE FUNCTIONS        │ │                         │
//! └─────────────────────────────────┘ └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product values and capability tags
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - The in-flight order aggregate
//! - [`promo`] - Promotion rules and the engine that applies them
//! - [`processor`] - Builds and prices orders
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic pricing (the one random choice, the
//!    free-extra pick, takes an injectable RNG)
//! 2. **No I/O**: file access lives in brew-store, terminal access in the app
//! 3. **Integer Money**: all monetary values are rappen (i64), never floats
//! 4. **Explicit Errors**: typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{
//!     EveryNthBeverageFree, Money, OrderProcessor, Product, PromoEngine, Tag,
//! };
//!
//! let mut engine = PromoEngine::new();
//! engine.register(Box::new(EveryNthBeverageFree::new()));
//! let mut processor = OrderProcessor::new(engine);
//!
//! let coffees: Vec<Product> = (0..5)
//!     .map(|_| Product::new("Small coffee", Money::from_cents(255), [Tag::Beverage]).unwrap())
//!     .collect();
//!
//! let order = processor.process_order(coffees, Vec::new()).unwrap();
//!
//! // The 5th beverage is free.
//! assert_eq!(order.total_discount(), Money::from_cents(255));
//! assert_eq!(order.net_total(), Money::from_cents(4 * 255));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod processor;
pub mod promo;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use brew_core::Money` instead of
// `use brew_core::money::Money`.

pub use catalog::{Product, Tag};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderStatus};
pub use processor::OrderProcessor;
pub use promo::{
    EveryNthBeverageFree, FreeExtraWithBeverageAndSnack, PromoEngine, PromoRule,
    FREE_BEVERAGE_INTERVAL,
};
