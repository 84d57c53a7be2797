//! High-level pipeline: cart CSV file to [`ParseResult`].
//!
//! ```text
//! Read -> Validate -> (fail if any error) -> Split lines -> Parse each data line -> Total
//! ```
//!
//! Each step sits behind its own trait ([`SourceReader`], [`Validator`],
//! [`LineParser`], [`Aggregator`]) and can be swapped on a [`CartParser`].
//!
//! # Example
//!
//! ```rust,no_run
//! use cartparse::CartParser;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = CartParser::new().parse("samples/cart.csv")?;
//!     println!("{} items, total {}", result.items.len(), result.total);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use crate::error::{ParseError, ParseOutcome};
use crate::logs::{log_error, log_error_indent, log_info, log_success};
use crate::models::{CartItem, ParseResult};
use crate::parser::{LineParser, RecordParser};
use crate::reader::{FileReader, ReaderOptions, SourceReader};
use crate::validation::{SchemaValidator, Validator};

use super::total::{Aggregator, PriceTotal};

/// Cart parser composed of a reader, validator, line parser and aggregator.
#[derive(Debug, Clone, Default)]
pub struct CartParser<R = FileReader, V = SchemaValidator, P = RecordParser, A = PriceTotal> {
    reader: R,
    validator: V,
    line_parser: P,
    aggregator: A,
}

impl CartParser {
    /// Parser with the default components (file reader, schema validator,
    /// UUID ids, price total).
    pub fn new() -> Self {
        Self::default()
    }

    /// Default parser with custom reader options.
    pub fn with_options(options: ReaderOptions) -> Self {
        Self::new().with_reader(FileReader::with_options(options))
    }
}

impl<R, V, P, A> CartParser<R, V, P, A> {
    pub fn with_reader<R2: SourceReader>(self, reader: R2) -> CartParser<R2, V, P, A> {
        CartParser {
            reader,
            validator: self.validator,
            line_parser: self.line_parser,
            aggregator: self.aggregator,
        }
    }

    pub fn with_validator<V2: Validator>(self, validator: V2) -> CartParser<R, V2, P, A> {
        CartParser {
            reader: self.reader,
            validator,
            line_parser: self.line_parser,
            aggregator: self.aggregator,
        }
    }

    pub fn with_line_parser<P2: LineParser>(self, line_parser: P2) -> CartParser<R, V, P2, A> {
        CartParser {
            reader: self.reader,
            validator: self.validator,
            line_parser,
            aggregator: self.aggregator,
        }
    }

    pub fn with_aggregator<A2: Aggregator>(self, aggregator: A2) -> CartParser<R, V, P, A2> {
        CartParser {
            reader: self.reader,
            validator: self.validator,
            line_parser: self.line_parser,
            aggregator,
        }
    }
}

impl<R, V, P, A> CartParser<R, V, P, A>
where
    R: SourceReader,
    V: Validator,
    P: LineParser,
    A: Aggregator,
{
    /// Read, validate and parse the cart file at `path`.
    ///
    /// Fails with [`ParseError::Validation`] (message `Validation failed!`)
    /// when the file does not match the schema. No item is built in that case.
    pub fn parse(&self, path: impl AsRef<Path>) -> ParseOutcome<ParseResult> {
        let path = path.as_ref();
        log_info(format!("Reading cart file {}", path.display()));
        let content = self.reader.read_source(path)?;
        self.parse_str(&content)
    }

    /// Validate and parse cart CSV text already in memory.
    pub fn parse_str(&self, content: &str) -> ParseOutcome<ParseResult> {
        log_info("Validating...");
        let errors = self.validator.validate(content);
        if !errors.is_empty() {
            log_error(format!("{} validation error(s)", errors.len()));
            for err in &errors {
                log_error_indent(
                    format!("{} (row {}, column {}): {}", err.kind.as_str(), err.row, err.column, err.message),
                    1,
                );
            }
            return Err(ParseError::Validation { errors });
        }
        log_success("Content matches the cart schema");

        let items: Vec<CartItem> = content
            .split('\n')
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.line_parser.parse_line(line))
            .collect();

        let total = self.aggregator.total(&items);
        log_success(format!("Parsed {} items, total {}", items.len(), total));

        Ok(ParseResult { items, total })
    }
}

/// Parse a cart file with the default components.
pub fn parse_cart_file(path: impl AsRef<Path>) -> ParseOutcome<ParseResult> {
    CartParser::new().parse(path)
}
