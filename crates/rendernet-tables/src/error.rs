//! Error types for table I/O.

use std::fmt;
use std::io;

use rendernet_core::ConfigError;

/// Errors reading or writing a table.
///
/// None of these are recoverable within a run; they propagate to the
/// caller.
#[derive(Debug)]
pub enum TableError {
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// The CSV layer rejected a record (bad quoting, wrong field count,
    /// unparsable number).
    Csv(csv::Error),
    /// The header row does not match the table's column contract.
    Header {
        /// Table being read.
        table: &'static str,
        /// Required columns, in order.
        expected: Vec<String>,
        /// Columns found.
        found: Vec<String>,
    },
    /// A cell holds a value outside its column's domain.
    InvalidValue {
        /// Table being read.
        table: &'static str,
        /// 1-based data row (the header is row 0).
        row: usize,
        /// Column name.
        column: &'static str,
        /// Why the value was rejected.
        detail: String,
    },
    /// The loaded agents do not form a valid population.
    Config(ConfigError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "CSV error: {e}"),
            Self::Header {
                table,
                expected,
                found,
            } => write!(
                f,
                "{table} table header mismatch: expected [{}], found [{}]",
                expected.join(", "),
                found.join(", ")
            ),
            Self::InvalidValue {
                table,
                row,
                column,
                detail,
            } => write!(f, "{table} row {row}, column {column}: {detail}"),
            Self::Config(e) => write!(f, "invalid population: {e}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return Self::Csv(e);
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            other => Self::Io(io::Error::other(format!("{other:?}"))),
        }
    }
}

impl From<ConfigError> for TableError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
