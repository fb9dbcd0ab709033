//! Helpers for loading transaction records from delimited tabular files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Trim;

use crate::{
    errors::Error,
    types::{Record, RecordStore},
};

/// Loads transaction records from a delimited file stream.
///
/// Column names are taken verbatim from the first row; no schema validation
/// happens here. An aggregation that needs an absent column reports
/// [`Error::MissingColumn`](crate::errors::Error::MissingColumn) when it is
/// invoked, not at load time.
///
/// Expects input data in this form (any subset of columns works for the
/// operations that do not reference the missing ones):
/// ```csv
/// category, spending,  month, location, income
/// Food,     "$10.00",  Jan,   NY,       $100
/// Food,     "$5.00",   Feb,   NY,       $0
/// ```
pub fn load_records_from_csv<R>(reader: &mut R, delimiter: u8) -> Result<RecordStore, Error>
where
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);
    let columns = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    Ok(RecordStore { columns, records })
}

/// Loads transaction records from a file on disk.
///
/// # Errors
/// [`Error::Open`](crate::errors::Error::Open) if the file does not exist or
/// is unreadable; [`Error::Load`](crate::errors::Error::Load) if its contents
/// are not parseable as delimited tabular data.
pub fn load_records_from_path<P>(path: P, delimiter: u8) -> Result<RecordStore, Error>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    load_records_from_csv(&mut reader, delimiter)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const TEST_INPUT_CSV: &[u8] = b"category, spending, month, location, income
Food, $10.00, Jan, NY, $100
Food, $5.00, Feb, NY, $0
Rent,\"$1,200.00\", Jan, NY, $0
";

    #[test]
    fn test_load_captures_columns_and_records() {
        let mut cursor = Cursor::new(TEST_INPUT_CSV);
        let store = load_records_from_csv(&mut cursor, b',').unwrap();
        assert_eq!(
            store.columns(),
            ["category", "spending", "month", "location", "income"]
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[0].cell("category"), Some("Food"));
        assert_eq!(store.records()[0].cell("spending"), Some("$10.00"));
        // Quoted thousands separators survive the load untouched
        assert_eq!(store.records()[2].cell("spending"), Some("$1,200.00"));
    }

    #[test]
    fn test_load_with_custom_delimiter() {
        let mut cursor = Cursor::new(b"category;spending\nFood;$7.50\n");
        let store = load_records_from_csv(&mut cursor, b';').unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].cell("spending"), Some("$7.50"));
    }

    #[test]
    fn test_load_rejects_misshapen_rows() {
        let mut cursor = Cursor::new(b"category,spending\nFood,$7.50,extra,cells\n");
        let result = load_records_from_csv(&mut cursor, b',');
        assert!(matches!(result, Err(Error::Load(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_records_from_path("/no/such/records.csv", b',');
        assert!(matches!(result, Err(Error::Open(_))));
    }

    #[test]
    fn test_load_empty_input_yields_empty_store() {
        let mut cursor = Cursor::new(b"category,spending,month,location,income\n");
        let store = load_records_from_csv(&mut cursor, b',').unwrap();
        assert!(store.is_empty());
    }
}
