//! # Menu Price Tables
//!
//! Enum-based price tables for the counter menu. Each entry produces a
//! tagged [`Product`] for the core pipeline; tags, not the enums, drive
//! promotion eligibility.

use brew_core::{Money, Product, Tag};

// =============================================================================
// Coffee
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoffeeSize {
    Small,
    Medium,
    Large,
}

impl CoffeeSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            CoffeeSize::Small => "Small coffee",
            CoffeeSize::Medium => "Medium coffee",
            CoffeeSize::Large => "Large coffee",
        }
    }

    pub fn price(&self) -> Money {
        match self {
            CoffeeSize::Small => Money::from_cents(255),
            CoffeeSize::Medium => Money::from_cents(305),
            CoffeeSize::Large => Money::from_cents(355),
        }
    }

    pub fn product(&self) -> Product {
        Product::new(self.display_name(), self.price(), [Tag::Beverage])
            .expect("static menu entry is valid")
    }
}

// =============================================================================
// Orange Juice
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JuiceSize {
    Small,
}

impl JuiceSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            JuiceSize::Small => "Fresh Orange Juice (0.25l)",
        }
    }

    pub fn price(&self) -> Money {
        match self {
            JuiceSize::Small => Money::from_cents(395),
        }
    }

    pub fn product(&self) -> Product {
        Product::new(self.display_name(), self.price(), [Tag::Beverage])
            .expect("static menu entry is valid")
    }
}

// =============================================================================
// Bacon Roll
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollSize {
    Standard,
}

impl RollSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            RollSize::Standard => "Standard Bacon Roll",
        }
    }

    pub fn price(&self) -> Money {
        match self {
            RollSize::Standard => Money::from_cents(453),
        }
    }

    pub fn product(&self) -> Product {
        Product::new(self.display_name(), self.price(), [Tag::Snack])
            .expect("static menu entry is valid")
    }
}

// =============================================================================
// Extras
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraOption {
    ExtraMilk,
    FoamedMilk,
    SpecialRoast,
}

impl ExtraOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExtraOption::ExtraMilk => "Extra milk",
            ExtraOption::FoamedMilk => "Foamed milk",
            ExtraOption::SpecialRoast => "Special roast coffee",
        }
    }

    pub fn price(&self) -> Money {
        match self {
            ExtraOption::ExtraMilk => Money::from_cents(32),
            ExtraOption::FoamedMilk => Money::from_cents(51),
            ExtraOption::SpecialRoast => Money::from_cents(95),
        }
    }

    pub fn product(&self) -> Product {
        Product::new(self.display_name(), self.price(), [Tag::Extra])
            .expect("static menu entry is valid")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_tags_and_prices() {
        let small = CoffeeSize::Small.product();
        assert!(small.is_beverage());
        assert!(!small.is_snack());
        assert_eq!(small.price().cents(), 255);
        assert_eq!(CoffeeSize::Large.product().price().cents(), 355);
    }

    #[test]
    fn test_roll_is_snack() {
        let roll = RollSize::Standard.product();
        assert!(roll.is_snack());
        assert!(!roll.is_beverage());
        assert_eq!(roll.price().cents(), 453);
    }

    #[test]
    fn test_extras_are_extras() {
        for option in [
            ExtraOption::ExtraMilk,
            ExtraOption::FoamedMilk,
            ExtraOption::SpecialRoast,
        ] {
            assert!(option.product().is_extra());
        }
        assert_eq!(ExtraOption::ExtraMilk.product().price().cents(), 32);
    }

    #[test]
    fn test_juice_is_beverage() {
        let juice = JuiceSize::Small.product();
        assert!(juice.is_beverage());
        assert_eq!(juice.price().cents(), 395);
    }
}
