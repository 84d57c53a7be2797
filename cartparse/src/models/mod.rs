//! Domain models for the cart parsing pipeline.
//!
//! - [`SCHEMA`] - Fixed column layout every cart file must follow
//! - [`CartItem`] - One parsed data row with its generated id
//! - [`ErrorDescriptor`] - One validation problem (header, row or cell)
//! - [`ParseResult`] - Parsed items plus the cart total

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Schema
// =============================================================================

/// Kind of value a column accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    /// Any nonempty string after trimming.
    String,
    /// A finite number greater than zero.
    NumberPositive,
}

/// One expected column of the cart file.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Column {
    /// Literal header text.
    pub name: &'static str,
    /// Field name on [`CartItem`].
    pub key: &'static str,
    /// Accepted cell values.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// Column layout of a cart file, in order.
pub static SCHEMA: [Column; 3] = [
    Column {
        name: "Product name",
        key: "name",
        column_type: ColumnType::String,
    },
    Column {
        name: "Price",
        key: "price",
        column_type: ColumnType::NumberPositive,
    },
    Column {
        name: "Quantity",
        key: "quantity",
        column_type: ColumnType::NumberPositive,
    },
];

// =============================================================================
// Records
// =============================================================================

/// A parsed cart line.
///
/// `quantity` is NaN when the source cell held no integer. It is written to
/// JSON as an integer when it has no fractional part and as `null` when NaN.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(with = "quantity_format")]
    pub quantity: f64,
}

impl CartItem {
    /// Price times quantity.
    pub fn extended_price(&self) -> f64 {
        self.price * self.quantity
    }
}

mod quantity_format {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Output of a successful parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseResult {
    /// Items in file order.
    pub items: Vec<CartItem>,
    /// Sum of price * quantity over `items`.
    pub total: f64,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Where a validation problem was found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Header,
    Row,
    Cell,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Row => "row",
            Self::Cell => "cell",
        }
    }
}

/// A single validation problem.
///
/// `row` is the zero-based line index (the header is row 0). `column` is the
/// zero-based cell index, or -1 for whole-row problems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDescriptor {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub row: usize,
    pub column: i64,
    pub message: String,
}

impl ErrorDescriptor {
    pub fn new(kind: ErrorKind, row: usize, column: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            row,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
