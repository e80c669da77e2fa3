//! # Receipt Presentation
//!
//! Consumes an ordered sequence of (description, price) rows plus the final
//! net total and total discount, and renders them. The CLI presenter prints
//! dot-leader rows:
//!
//! ```text
//! === Brew POS Receipt ===
//! Date: 2026-08-30 14:03
//!
//! Items:
//! 1. Small coffee..............................CHF 2.55
//!
//! Total cost: CHF 2.55
//! Total discount: CHF 0.00
//! ```

use std::io::Write;

use brew_core::{Money, ValidationError};
use chrono::Local;

/// Total line width for dot-leader formatting.
const TOTAL_WIDTH: usize = 50;

// =============================================================================
// Receipt Rows
// =============================================================================

/// A single line item: description and price, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRow {
    description: String,
    price: Money,
}

impl ReceiptRow {
    pub fn new(description: impl Into<String>, price: Money) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "description".to_string(),
            });
        }
        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "price".to_string(),
            });
        }
        Ok(Self { description, price })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// The assembled receipt: rows plus transaction totals.
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    rows: Vec<ReceiptRow>,
    total_cost: Money,
    total_discount: Money,
}

impl Receipt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: ReceiptRow) {
        self.rows.push(row);
    }

    pub fn set_total_cost(&mut self, total: Money) {
        self.total_cost = total;
    }

    pub fn set_total_discount(&mut self, discount: Money) {
        self.total_discount = discount;
    }

    pub fn rows(&self) -> &[ReceiptRow] {
        &self.rows
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn total_discount(&self) -> Money {
        self.total_discount
    }
}

// =============================================================================
// Presenters
// =============================================================================

/// Renders a finished receipt; no return value.
pub trait ReceiptPresenter {
    fn present(&mut self, receipt: &Receipt);
}

/// Prints the receipt to a writer (stdout at the counter).
pub struct CliReceiptPresenter<W: Write> {
    out: W,
}

impl<W: Write> CliReceiptPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReceiptPresenter for CliReceiptPresenter<W> {
    fn present(&mut self, receipt: &Receipt) {
        // Receipt output failing is not actionable at the counter; ignore.
        let _ = writeln!(self.out, "\n=== Brew POS Receipt ===");
        let _ = writeln!(self.out, "Date: {}", Local::now().format("%Y-%m-%d %H:%M"));
        let _ = writeln!(self.out, "\nItems:");

        for (i, row) in receipt.rows().iter().enumerate() {
            let _ = writeln!(
                self.out,
                "{}",
                format_with_dot_leaders(&format!("{}. {}", i + 1, row.description()), row.price())
            );
        }

        let _ = writeln!(self.out, "\nTotal cost: {}", receipt.total_cost());
        let _ = writeln!(self.out, "Total discount: {}", receipt.total_discount());
        let _ = writeln!(self.out, "\nThank you for visiting Brew POS!");
        let _ = self.out.flush();
    }
}

/// Formats a line item with the price right-aligned behind dot leaders.
pub fn format_with_dot_leaders(description: &str, price: Money) -> String {
    let price_str = price.to_string();
    let dots = TOTAL_WIDTH.saturating_sub(description.chars().count() + price_str.len());
    format!("{}{}{}", description, ".".repeat(dots), price_str)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_validation() {
        assert!(ReceiptRow::new("Small coffee", Money::from_cents(255)).is_ok());
        assert!(ReceiptRow::new("", Money::from_cents(255)).is_err());
        assert!(ReceiptRow::new("Small coffee", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_dot_leaders_width() {
        let line = format_with_dot_leaders("1. Small coffee", Money::from_cents(255));
        assert_eq!(line.chars().count(), 50);
        assert!(line.starts_with("1. Small coffee."));
        assert!(line.ends_with("CHF 2.55"));
    }

    #[test]
    fn test_dot_leaders_overlong_description() {
        let long = "x".repeat(60);
        let line = format_with_dot_leaders(&long, Money::from_cents(100));
        assert!(line.starts_with(&long));
        assert!(line.ends_with("CHF 1.00"));
    }

    #[test]
    fn test_cli_presenter_renders_rows_and_totals() {
        let mut receipt = Receipt::new();
        receipt.add_row(ReceiptRow::new("Small coffee", Money::from_cents(255)).unwrap());
        receipt.add_row(ReceiptRow::new("Standard Bacon Roll", Money::from_cents(453)).unwrap());
        receipt.set_total_cost(Money::from_cents(708));
        receipt.set_total_discount(Money::zero());

        let mut buf = Vec::new();
        CliReceiptPresenter::new(&mut buf).present(&receipt);
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("=== Brew POS Receipt ==="));
        assert!(output.contains("1. Small coffee"));
        assert!(output.contains("2. Standard Bacon Roll"));
        assert!(output.contains("Total cost: CHF 7.08"));
        assert!(output.contains("Total discount: CHF 0.00"));
    }
}
