/// Error type that can be returned by fallible operations in this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading the records file
    #[error("Could not open records file")]
    Open(#[from] std::io::Error),
    /// Error parsing the records file as delimited tabular data
    #[error("Error loading records")]
    Load(#[from] csv::Error),
    /// A spending or income value could not be coerced to a number after
    /// stripping currency symbols. Never substituted with zero, since that
    /// would corrupt financial totals.
    #[error("Could not parse {0:?} as a currency amount")]
    Parse(String),
    /// An aggregation referenced a column that is absent from the loaded
    /// records. Raised when the aggregation runs, not at load time.
    #[error("Column {0:?} is missing from the loaded records")]
    MissingColumn(String),
    /// The chart backend failed to render
    #[error("Could not render chart: {0}")]
    Chart(String),
}
