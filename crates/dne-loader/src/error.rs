//! Error types for the loader library.

use thiserror::Error;

/// Main error type for load operations.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested table is not present in the registry.
    #[error("Unknown table: {0}")]
    TableNotFound(String),

    /// A row's value count does not match the table's column list.
    #[error("Row {row} of table {table} has {actual} values, expected {expected}")]
    RowFormat {
        table: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The self-referencing dependency graph of a table contains a cycle.
    #[error("Cyclic parent reference in table {0} - input data is corrupt")]
    Cycle(String),

    /// Database-level error (constraint violation, I/O, SQL failure).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LoaderError {
    /// Create a RowFormat error for a mismatched row.
    pub fn row_format(table: impl Into<String>, row: usize, expected: usize, actual: usize) -> Self {
        LoaderError::RowFormat {
            table: table.into(),
            row,
            expected,
            actual,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for load operations.
pub type Result<T> = std::result::Result<T, LoaderError>;
