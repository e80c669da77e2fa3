//! # Counter Input Loop
//!
//! Text-based menu for building a basket at the counter. The loop reads from
//! any `BufRead` and writes prompts to any `Write`, so tests drive it with
//! in-memory buffers instead of stdin.
//!
//! ## Main Menu
//! ```text
//! 1 - Order Coffee
//! 2 - Order Orange Juice
//! 3 - Order Bacon Roll
//! 4 - Add Extra Items
//! 5 - Review & Confirm Order
//! 6 - Go to Payment
//! 7 - Exit (without payment)
//! ```

use std::io::{BufRead, Write};

use brew_core::Product;

use crate::menu::{CoffeeSize, ExtraOption, JuiceSize, RollSize};
use crate::receipt::format_with_dot_leaders;

// =============================================================================
// Basket
// =============================================================================

/// The selection being assembled before checkout.
#[derive(Debug, Default)]
pub struct Basket {
    products: Vec<Product>,
    ready_to_pay: bool,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_ready_to_pay(&self) -> bool {
        self.ready_to_pay && !self.products.is_empty()
    }

    pub fn set_ready_to_pay(&mut self, ready: bool) {
        self.ready_to_pay = ready;
    }

    /// Hands the selection to the checkout, consuming the basket.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    fn has_coffee(&self) -> bool {
        self.products
            .iter()
            .any(|p| p.name().ends_with("coffee") && p.is_beverage())
    }
}

// =============================================================================
// Input Loop
// =============================================================================

/// Runs the menu loop until the customer goes to payment or exits.
///
/// Returns the basket; the caller checks `is_ready_to_pay` to decide whether
/// a checkout follows.
pub fn run_input_loop<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Basket {
    let mut basket = Basket::new();

    loop {
        print_main_menu(output);
        let Some(choice) = read_choice(input, output) else {
            // Input closed: treat like exit without payment.
            basket.set_ready_to_pay(false);
            return basket;
        };

        match choice {
            1 => order_coffee(input, output, &mut basket),
            2 => {
                let juice = JuiceSize::Small.product();
                let _ = writeln!(output, "You chose {} ({})", juice.name(), juice.price());
                basket.add(juice);
            }
            3 => {
                let roll = RollSize::Standard.product();
                let _ = writeln!(output, "You chose {} ({})", roll.name(), roll.price());
                basket.add(roll);
            }
            4 => order_extra(input, output, &mut basket),
            5 => review_order(output, &mut basket),
            6 => {
                if basket.is_ready_to_pay() {
                    return basket;
                }
                let _ = writeln!(
                    output,
                    "Please confirm your order. Select 'Review & Confirm Order' from the main menu."
                );
            }
            7 => {
                basket.set_ready_to_pay(false);
                let _ = writeln!(output, "Exit - closing without payment.");
                return basket;
            }
            _ => {
                let _ = writeln!(output, "Invalid option, please select a valid item.");
            }
        }
    }
}

fn print_main_menu<W: Write>(output: &mut W) {
    let _ = writeln!(output, "\nPlease choose an option:");
    let _ = writeln!(output, "1 - Order Coffee");
    let _ = writeln!(output, "2 - Order Orange Juice");
    let _ = writeln!(output, "3 - Order Bacon Roll");
    let _ = writeln!(output, "4 - Add Extra Items");
    let _ = writeln!(output, "5 - Review & Confirm Order");
    let _ = writeln!(output, "6 - Go to Payment");
    let _ = writeln!(output, "7 - Exit (without payment)");
    let _ = write!(output, "Choose an option: ");
    let _ = output.flush();
}

/// Reads one line and parses it as a menu number. `None` means end of input.
fn read_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Option<u32> {
    let mut line = String::new();
    if input.read_line(&mut line).ok()? == 0 {
        return None;
    }
    match line.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            let _ = writeln!(output, "Please enter a number.");
            Some(0) // falls through to the invalid-option branch
        }
    }
}

fn order_coffee<R: BufRead, W: Write>(input: &mut R, output: &mut W, basket: &mut Basket) {
    let _ = writeln!(output, "You chose Coffee. What size?");
    for (i, size) in [CoffeeSize::Small, CoffeeSize::Medium, CoffeeSize::Large]
        .iter()
        .enumerate()
    {
        let _ = writeln!(output, "{} - {} ({})", i + 1, size.display_name(), size.price());
    }
    let _ = write!(output, "Choose an option: ");
    let _ = output.flush();

    let size = match read_choice(input, output) {
        Some(1) => CoffeeSize::Small,
        Some(2) => CoffeeSize::Medium,
        Some(3) => CoffeeSize::Large,
        _ => {
            let _ = writeln!(output, "Invalid option, please select a valid size.");
            return;
        }
    };
    basket.add(size.product());
}

fn order_extra<R: BufRead, W: Write>(input: &mut R, output: &mut W, basket: &mut Basket) {
    if !basket.has_coffee() {
        let _ = writeln!(output, "First select coffee and then you can add Extra items.");
        return;
    }

    let _ = writeln!(output, "You chose Extra. What is your option?");
    for (i, option) in [
        ExtraOption::ExtraMilk,
        ExtraOption::FoamedMilk,
        ExtraOption::SpecialRoast,
    ]
    .iter()
    .enumerate()
    {
        let _ = writeln!(
            output,
            "{} - {} ({})",
            i + 1,
            option.display_name(),
            option.price()
        );
    }
    let _ = write!(output, "Choose an option: ");
    let _ = output.flush();

    let option = match read_choice(input, output) {
        Some(1) => ExtraOption::ExtraMilk,
        Some(2) => ExtraOption::FoamedMilk,
        Some(3) => ExtraOption::SpecialRoast,
        _ => {
            let _ = writeln!(output, "Invalid option, please select a valid extra.");
            return;
        }
    };
    basket.add(option.product());
}

fn review_order<W: Write>(output: &mut W, basket: &mut Basket) {
    if basket.is_empty() {
        let _ = writeln!(output, "Your order is empty.");
        return;
    }

    let _ = writeln!(output, "\nYour order:");
    for (i, product) in basket.products().iter().enumerate() {
        let _ = writeln!(
            output,
            "{}",
            format_with_dot_leaders(&format!("{}. {}", i + 1, product.name()), product.price())
        );
    }
    basket.set_ready_to_pay(true);
    let _ = writeln!(output, "Order confirmed. Select 'Go to Payment' to pay.");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Basket, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let basket = run_input_loop(&mut input, &mut output);
        (basket, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_order_small_coffee_and_pay() {
        // coffee -> small, review, payment
        let (basket, _) = run("1\n1\n5\n6\n");

        assert!(basket.is_ready_to_pay());
        assert_eq!(basket.products().len(), 1);
        assert_eq!(basket.products()[0].name(), "Small coffee");
    }

    #[test]
    fn test_payment_requires_confirmation() {
        // try to pay before review, then exit
        let (basket, output) = run("2\n6\n7\n");

        assert!(!basket.is_ready_to_pay());
        assert!(output.contains("Please confirm your order"));
    }

    #[test]
    fn test_extras_require_coffee_first() {
        let (basket, output) = run("4\n7\n");

        assert!(basket.is_empty());
        assert!(output.contains("First select coffee"));
    }

    #[test]
    fn test_extra_after_coffee() {
        // coffee -> large, extra -> foamed milk, review, pay
        let (basket, _) = run("1\n3\n4\n2\n5\n6\n");

        let names: Vec<&str> = basket.products().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Large coffee", "Foamed milk"]);
        assert!(basket.is_ready_to_pay());
    }

    #[test]
    fn test_full_breakfast_order() {
        // coffee small, juice, bacon roll, extra milk, review, pay
        let (basket, _) = run("1\n1\n2\n3\n4\n1\n5\n6\n");

        assert_eq!(basket.products().len(), 4);
        assert!(basket.is_ready_to_pay());
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (basket, output) = run("banana\n9\n7\n");

        assert!(basket.is_empty());
        assert!(output.contains("Please enter a number."));
        assert!(output.contains("Invalid option"));
    }

    #[test]
    fn test_eof_exits_without_payment() {
        let (basket, _) = run("1\n1\n");

        assert!(!basket.is_ready_to_pay());
        assert_eq!(basket.products().len(), 1);
    }

    #[test]
    fn test_exit_discards_readiness() {
        let (basket, _) = run("2\n5\n7\n");

        assert!(!basket.is_ready_to_pay());
    }
}
