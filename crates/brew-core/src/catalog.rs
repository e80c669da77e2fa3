//! # Product Catalog Types
//!
//! Immutable product values and their capability tags.
//!
//! ## Tags, Not Type Hierarchies
//! The promotion rules care about *capabilities* (is this a beverage? a
//! snack? an extra?), not concrete product kinds. A product carries an
//! explicit set of [`Tag`]s, and rule eligibility is a tag-membership test.
//! A product may carry zero or more tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Capability Tags
// =============================================================================

/// Capability classification determining promotion eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Counts toward the every-Nth-beverage promotion and is the only
    /// category persisted to the order history.
    Beverage,
    /// Food item; combines with a beverage to unlock the free-extra rule.
    Snack,
    /// Add-on item that the free-extra rule may discount.
    Extra,
}

// =============================================================================
// Product
// =============================================================================

/// An immutable product value: name, price and capability tags.
///
/// Equality and hashing are by `(name, price)` only; tags classify but do
/// not identify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    tags: BTreeSet<Tag>,
}

impl Product {
    /// Creates a product, validating name and price at the boundary.
    ///
    /// ## Errors
    /// - empty (or whitespace-only) name
    /// - negative price
    pub fn new(
        name: impl Into<String>,
        price: Money,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "name".to_string(),
            });
        }
        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "price".to_string(),
            });
        }
        Ok(Product {
            name,
            price,
            tags: tags.into_iter().collect(),
        })
    }

    /// The display name, also used on receipts and in the history file.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Checks membership of a single capability tag.
    #[inline]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    #[inline]
    pub fn is_beverage(&self) -> bool {
        self.has_tag(Tag::Beverage)
    }

    #[inline]
    pub fn is_snack(&self) -> bool {
        self.has_tag(Tag::Snack)
    }

    #[inline]
    pub fn is_extra(&self) -> bool {
        self.has_tag(Tag::Extra)
    }
}

/// Identity is `(name, price)`; tags are deliberately excluded so a history
/// record round-trips equal to the product it was written from.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price == other.price
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let coffee =
            Product::new("Small coffee", Money::from_cents(255), [Tag::Beverage]).unwrap();
        assert_eq!(coffee.name(), "Small coffee");
        assert_eq!(coffee.price().cents(), 255);
        assert!(coffee.is_beverage());
        assert!(!coffee.is_snack());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Product::new("", Money::from_cents(100), [Tag::Snack]).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));

        let err = Product::new("   ", Money::from_cents(100), []).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = Product::new("Small coffee", Money::from_cents(-1), [Tag::Beverage]).unwrap_err();
        assert!(matches!(err, ValidationError::MustBeNonNegative { .. }));
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(Product::new("Tap water", Money::zero(), [Tag::Beverage]).is_ok());
    }

    #[test]
    fn test_equality_ignores_tags() {
        let a = Product::new("Small coffee", Money::from_cents(255), [Tag::Beverage]).unwrap();
        let b = Product::new("Small coffee", Money::from_cents(255), []).unwrap();
        let c = Product::new("Small coffee", Money::from_cents(305), [Tag::Beverage]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_untagged_product_matches_no_rule_population() {
        let mystery = Product::new("Gift card", Money::from_cents(1000), []).unwrap();
        assert!(!mystery.is_beverage());
        assert!(!mystery.is_snack());
        assert!(!mystery.is_extra());
    }
}
