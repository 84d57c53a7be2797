//! Cart file validation against [`SCHEMA`].
//!
//! Validation never fails: every problem in the file is collected as an
//! [`ErrorDescriptor`] so the caller sees them all in one pass.
//!
//! # Checks
//!
//! - Header: each expected column name must match the trimmed header cell.
//! - Row shape: every non-blank data line must have exactly three cells.
//!   A mis-shaped row gets no cell checks.
//! - Cells: `String` columns must be nonempty after trimming,
//!   `NumberPositive` columns must hold a finite number greater than zero.
//!
//! # Example
//!
//! ```
//! use cartparse::{validate, ErrorKind};
//!
//! let errors = validate("Product title,Price,Quantity\nMollis consequat,9.00,2");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, ErrorKind::Header);
//! ```

use crate::models::{ColumnType, ErrorDescriptor, ErrorKind, SCHEMA};

/// Checks raw CSV text and reports every problem found.
pub trait Validator {
    fn validate(&self, content: &str) -> Vec<ErrorDescriptor>;
}

/// Validator for the fixed cart schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl Validator for SchemaValidator {
    fn validate(&self, content: &str) -> Vec<ErrorDescriptor> {
        validate(content)
    }
}

/// Validate cart CSV text, returning every problem found.
pub fn validate(content: &str) -> Vec<ErrorDescriptor> {
    let mut errors = Vec::new();
    let mut lines = content.split('\n').enumerate();

    if let Some((_, header)) = lines.next() {
        check_header(header, &mut errors);
    }

    for (row, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        check_row(row, line, &mut errors);
    }

    errors
}

fn check_header(line: &str, errors: &mut Vec<ErrorDescriptor>) {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();

    for (i, column) in SCHEMA.iter().enumerate() {
        let actual = cells.get(i).copied().unwrap_or("");
        if actual != column.name {
            errors.push(ErrorDescriptor::new(
                ErrorKind::Header,
                0,
                i as i64,
                format!(
                    "Expected header to be named \"{}\" but received {}.",
                    column.name, actual
                ),
            ));
        }
    }
}

fn check_row(row: usize, line: &str, errors: &mut Vec<ErrorDescriptor>) {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();

    if cells.len() != SCHEMA.len() {
        errors.push(ErrorDescriptor::new(
            ErrorKind::Row,
            row,
            -1,
            format!(
                "Expected row to have {} cells but received {}.",
                SCHEMA.len(),
                cells.len()
            ),
        ));
        return;
    }

    for (i, (column, cell)) in SCHEMA.iter().zip(&cells).enumerate() {
        let message = match column.column_type {
            ColumnType::String if cell.is_empty() => {
                format!("Expected cell to be a nonempty string but received \"{}\".", cell)
            }
            ColumnType::NumberPositive if !is_positive_number(cell) => {
                format!("Expected cell to be a positive number but received \"{}\".", cell)
            }
            _ => continue,
        };
        errors.push(ErrorDescriptor::new(ErrorKind::Cell, row, i as i64, message));
    }
}

fn is_positive_number(cell: &str) -> bool {
    cell.parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}
