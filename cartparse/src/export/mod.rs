//! Rendering of parse results and validation errors.
//!
//! JSON output is the `{"items": [...], "total": n}` document. CSV output
//! lists one item per row with an `id,name,price,quantity` header.

use crate::error::{ExportError, ExportResult};
use crate::models::{CartItem, ErrorDescriptor, ParseResult};

/// Pretty JSON for a parse result.
pub fn result_to_json(result: &ParseResult) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Pretty JSON array of error descriptors.
pub fn errors_to_json(errors: &[ErrorDescriptor]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(errors)?)
}

/// CSV rows for parsed items. A NaN quantity is written as an empty cell.
pub fn items_to_csv(items: &[CartItem]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for item in items {
        writer.serialize(item)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
