//! Conversion of one data line into a [`CartItem`].
//!
//! Line parsing is permissive: it does no validation and never fails.
//! Unparseable numbers become NaN. Run [`crate::validate`] first.
//!
//! # Example
//!
//! ```
//! use cartparse::{parse_line, SequenceIds};
//!
//! let ids = SequenceIds::new(["1"]);
//! let item = parse_line("Tvoluptatem,10.32,1", &ids);
//!
//! assert_eq!(item.id, "1");
//! assert_eq!(item.name, "Tvoluptatem");
//! assert_eq!(item.price, 10.32);
//! assert_eq!(item.quantity, 1.0);
//! ```

mod ids;

pub use ids::{IdGenerator, SequenceIds, UuidGenerator};

use crate::models::CartItem;

/// Turns a data line into a cart item.
pub trait LineParser {
    fn parse_line(&self, line: &str) -> CartItem;
}

/// Line parser drawing ids from an [`IdGenerator`].
#[derive(Debug, Clone, Default)]
pub struct RecordParser<G = UuidGenerator> {
    ids: G,
}

impl<G: IdGenerator> RecordParser<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }
}

impl<G: IdGenerator> LineParser for RecordParser<G> {
    fn parse_line(&self, line: &str) -> CartItem {
        parse_line(line, &self.ids)
    }
}

/// Parse a data line, taking one fresh id from `ids`.
pub fn parse_line(line: &str, ids: &impl IdGenerator) -> CartItem {
    let mut cells = line.split(',').map(str::trim);
    let name = cells.next().unwrap_or("");
    let price = cells.next().unwrap_or("");
    let quantity = cells.next().unwrap_or("");

    CartItem {
        id: ids.next_id(),
        name: name.to_string(),
        price: price.parse().unwrap_or(f64::NAN),
        quantity: parse_int_prefix(quantity),
    }
}

/// Integer value of the leading `[+-]digits` run, NaN when there is none.
fn parse_int_prefix(cell: &str) -> f64 {
    let unsigned = cell.trim_start_matches(['+', '-']);
    let sign_len = cell.len() - unsigned.len();
    if sign_len > 1 {
        return f64::NAN;
    }
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return f64::NAN;
    }

    let value: f64 = unsigned[..digits].parse().unwrap_or(f64::NAN);
    if cell.starts_with('-') {
        -value
    } else {
        value
    }
}
