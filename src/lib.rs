#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
/// Bar-chart rendering over aggregated spending totals
pub mod chart;
/// Error handling and custom [`Error`](std::error::Error) types
pub mod errors;
/// Functions for loading transaction records from delimited files
pub mod io;
/// Aggregation queries over the loaded records
pub mod ops;
/// Data types used throughout Spendbook
pub mod types;
