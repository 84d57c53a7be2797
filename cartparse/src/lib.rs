//! # Cartparse - cart CSV validation and parsing
//!
//! Cartparse reads a CSV file of cart line items, checks it against a fixed
//! three-column schema and turns every data row into a [`CartItem`] with a
//! generated id, plus the cart total.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│  Validator  │────▶│ Line Parser │────▶│  Aggregator │
//! │  (reader)   │     │ (all errors)│     │ (uuid ids)  │     │   (total)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cartparse::CartParser;
//!
//! let result = CartParser::new().parse("cart.csv").unwrap();
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Schema, items, error descriptors
//! - [`reader`] - File reading with encoding detection
//! - [`validation`] - Schema validation
//! - [`parser`] - Line parsing and id generation
//! - [`transform`] - Total and pipeline
//! - [`export`] - JSON and CSV rendering
//! - [`logs`] - Pipeline logging

// Core modules
pub mod error;
pub mod models;

// Input
pub mod reader;

// Validation
pub mod validation;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod export;
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ExportError, ParseError, ParseOutcome, ReadError, ReadResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CartItem, Column, ColumnType, ErrorDescriptor, ErrorKind, ParseResult, SCHEMA};

// =============================================================================
// Re-exports - Components
// =============================================================================

pub use reader::{read_file, FileReader, ReaderOptions, SourceReader};
pub use validation::{validate, SchemaValidator, Validator};
pub use parser::{parse_line, IdGenerator, LineParser, RecordParser, SequenceIds, UuidGenerator};
pub use transform::{calc_total, parse_cart_file, Aggregator, CartParser, PriceTotal};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{errors_to_json, items_to_csv, result_to_json};
