//! Common datatypes supporting functions throughout Spendbook

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::Error;

/// A single transaction record, keyed by column name.
///
/// Records are deliberately schema-tolerant: whatever columns the source
/// file declares in its header row are the columns each record carries.
/// Aggregations that need a particular column check for it at call time.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Record {
    /// Raw cell values, keyed by the header name for each column
    cells: HashMap<String, String>,
}

impl Record {
    /// Returns the raw cell value for `column`, treating empty cells as absent.
    #[must_use]
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Holds the full set of transaction records for one program invocation.
///
/// The store is read-only after load: no record is ever mutated or removed,
/// and every aggregation is a pure query over the loaded records.
///
/// # Limitations
/// No persistence. All records are held in memory.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Column names taken verbatim from the source file's header row
    pub(crate) columns: Vec<String>,
    /// Storage for the loaded records
    pub(crate) records: Vec<Record>,
}

impl RecordStore {
    /// Returns the loaded records
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the column names declared by the source file's header row
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of loaded records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an [`Error::MissingColumn`] if `column` is not in the loaded schema.
    pub(crate) fn require_column(&self, column: &str) -> Result<(), Error> {
        if self.columns.iter().any(|name| name == column) {
            return Ok(());
        }
        Err(Error::MissingColumn(column.to_string()))
    }
}

/// Normalizes a currency-formatted value into a [`Decimal`].
///
/// Strips every literal `$` and `,` character and surrounding whitespace,
/// then parses the remainder as a decimal number. Values that are already
/// plain numerals pass through the same path with their value unchanged,
/// so the function is idempotent on its own output.
///
/// This is the single normalization point for money values: every
/// aggregation routes spending and income cells through it before summing.
///
/// # Errors
/// [`Error::Parse`] if the stripped value is empty or not a valid number.
pub fn parse_currency(value: &str) -> Result<Decimal, Error> {
    let stripped: String = value
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    stripped
        .parse()
        .map_err(|_| Error::Parse(value.to_string()))
}
