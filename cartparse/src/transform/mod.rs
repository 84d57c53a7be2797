//! Transformation module.
//!
//! - Total: aggregate price * quantity over parsed items
//! - Pipeline: read, validate, parse and total a cart file

pub mod pipeline;
pub mod total;

pub use pipeline::*;
pub use total::{calc_total, Aggregator, PriceTotal};
