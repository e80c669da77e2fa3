//! # Brew POS Counter
//!
//! CLI checkout terminal entry point.
//!
//! ## Startup Sequence
//! 1. Parse CLI arguments (history file path)
//! 2. Initialize tracing (RUST_LOG override, info default)
//! 3. Open the order-history store
//! 4. Wire promotion rules -> engine -> processor -> controller
//! 5. Run the menu loop, then check out the basket

mod controller;
mod input;
mod menu;
mod payment;
mod receipt;

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use brew_core::{
    EveryNthBeverageFree, FreeExtraWithBeverageAndSnack, OrderProcessor, PromoEngine,
};
use brew_store::FileOrderStore;

use controller::OrderController;
use input::run_input_loop;
use receipt::CliReceiptPresenter;

/// Brew POS - point-of-sale counter for a small retail shop.
#[derive(Debug, Parser)]
#[command(name = "counter", version, about)]
struct Args {
    /// Path of the order-history file (keeps the every-5th-beverage
    /// promotion counting across runs)
    #[arg(long, default_value = "orders.csv")]
    history_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(history_file = %args.history_file.display(), "starting Brew POS counter");

    let store = match FileOrderStore::open(&args.history_file) {
        Ok(store) => store,
        Err(err) => {
            error!(%err, "cannot open the order-history file");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = PromoEngine::new();
    engine.register(Box::new(EveryNthBeverageFree::new()));
    engine.register(Box::new(FreeExtraWithBeverageAndSnack::new()));
    let processor = OrderProcessor::new(engine);

    let presenter = CliReceiptPresenter::new(io::stdout());
    let mut controller = OrderController::new(processor, store, presenter);

    println!("Welcome to Brew POS!");

    let mut stdin = BufReader::new(io::stdin());
    let basket = run_input_loop(&mut stdin, &mut io::stdout());

    if basket.is_ready_to_pay() {
        if let Err(err) = controller.checkout(basket.into_products()) {
            error!(%err, "checkout failed; no payment was taken");
            return ExitCode::FAILURE;
        }
    }

    println!("\nThank you for visiting Brew POS! Have a great day!");
    ExitCode::SUCCESS
}
