//! # Order History Store
//!
//! Loads and saves previously-paid beverage records so the every-Nth-beverage
//! counter survives across program runs.
//!
//! ## On-Disk Format
//! Line-oriented, one order per line, beverage items only:
//! ```text
//! Small coffee,2.55;Fresh Orange Juice (0.25l),3.95
//! Medium coffee,3.05
//! ```
//! An order with no beverages has nothing to record and the writer skips it
//! entirely. The reader still tolerates empty lines and malformed entries
//! rather than failing the whole load: a partly damaged history degrades the
//! promotion counter, it never blocks a sale.
//!
//! ## Concurrency
//! Read-once at checkout start, append-once after payment, no locking. Two
//! terminals sharing one history file will race; single-terminal operation
//! is the documented target.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use brew_core::{Money, Order, Product, Tag};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Store Contract
// =============================================================================

/// The persistence gateway contract consumed by the order controller.
pub trait OrderStore {
    /// Loads all previously persisted orders.
    fn retrieve_orders(&self) -> StoreResult<Vec<Order>>;

    /// Appends finalized orders to the history. Called only after successful
    /// payment.
    fn store_orders(&self, orders: &[Order]) -> StoreResult<()>;
}

// =============================================================================
// File-Backed Store
// =============================================================================

/// Order-history store backed by a line-oriented CSV file.
#[derive(Debug, Clone)]
pub struct FileOrderStore {
    path: PathBuf,
}

impl FileOrderStore {
    /// Opens a store at `path`, creating the file if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            File::create(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "created new history file");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl OrderStore for FileOrderStore {
    fn retrieve_orders(&self) -> StoreResult<Vec<Order>> {
        let file = File::open(&self.path).map_err(|e| self.io_err(e))?;
        let reader = BufReader::new(file);

        let mut orders = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| self.io_err(e))?;
            if let Some(order) = decode_order(&line) {
                orders.push(order);
            }
        }
        debug!(path = %self.path.display(), count = orders.len(), "retrieved order history");
        Ok(orders)
    }

    /// Rewrites the file as existing orders plus the new ones, so the history
    /// stays continuous across successive application runs.
    fn store_orders(&self, orders: &[Order]) -> StoreResult<()> {
        let mut all = self.retrieve_orders()?;
        all.extend(orders.iter().cloned());

        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;
        let mut writer = BufWriter::new(file);
        for order in &all {
            let line = encode_order(order);
            // Orders without beverages have nothing to persist; don't write
            // empty lines.
            if line.is_empty() {
                continue;
            }
            writeln!(writer, "{}", line).map_err(|e| self.io_err(e))?;
        }
        writer.flush().map_err(|e| self.io_err(e))?;

        debug!(path = %self.path.display(), appended = orders.len(), total = all.len(), "stored order history");
        Ok(())
    }
}

// =============================================================================
// Line Codec
// =============================================================================

/// Encodes an order as `name,price;name,price`, beverage items only.
///
/// An order with no beverages encodes to an empty line.
fn encode_order(order: &Order) -> String {
    order
        .items()
        .iter()
        .filter(|p| p.is_beverage())
        .map(|p| format!("{},{}", p.name(), p.price().to_decimal_string()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Decodes one history line into an order of beverage-tagged products.
///
/// Returns `None` for empty lines or lines with no recoverable entry;
/// individual malformed entries are skipped with a warning.
fn decode_order(line: &str) -> Option<Order> {
    if line.trim().is_empty() {
        return None;
    }

    let mut products = Vec::new();
    for entry in line.split(';') {
        if entry.is_empty() {
            continue;
        }
        let Some((name, price)) = entry.split_once(',') else {
            warn!(entry, "skipping malformed history entry");
            continue;
        };
        let name = name.trim();
        let price = match Money::from_decimal_str(price) {
            Ok(p) => p,
            Err(_) => {
                warn!(entry, "skipping history entry with unparseable price");
                continue;
            }
        };
        match Product::new(name, price, [Tag::Beverage]) {
            Ok(product) => products.push(product),
            Err(err) => warn!(entry, %err, "skipping invalid history entry"),
        }
    }

    if products.is_empty() {
        return None;
    }
    // Construction cannot fail here: products is non-empty.
    Order::new(products).ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
