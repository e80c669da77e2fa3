//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! brew-core errors (this file)
//! ├── CoreError        - Order processing and promotion failures
//! └── ValidationError  - Input validation failures
//!
//! brew-store errors (separate crate)
//! └── StoreError       - History file read/write failures
//!
//! Flow: ValidationError -> CoreError -> caller; StoreError is recovered
//! by the controller and never crosses into the core.
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, amounts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations during order construction and
/// pricing. Validation failures stop the transaction before payment.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A new order was requested with no items.
    ///
    /// Raised at the processor boundary; an empty selection is a caller bug,
    /// not a normal order shape.
    #[error("order must contain at least one item")]
    EmptyOrder,

    /// A promotion tried to apply a negative discount.
    ///
    /// `total_discount` only ever grows; a negative application is rejected
    /// and the order is left untouched.
    #[error("discount cannot be negative: {0}")]
    NegativeDiscount(Money),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Any unexpected failure during pricing or promotion application.
    ///
    /// The caller either gets a fully priced order or this error, never a
    /// half-discounted one.
    #[error("failed to process order")]
    OrderProcessingFailed(#[source] Box<CoreError>),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a value handed across a component boundary doesn't meet
/// requirements. Rejected immediately, never silently coerced.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. an unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
