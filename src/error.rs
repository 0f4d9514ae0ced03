use std::path::PathBuf;

use thiserror::Error;

use crate::models::reference::PanelBrand;

/// Failure while building the reference tables. Any of these rejects the
/// whole load; no row is ever zero-filled.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed reference data: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount { line: u64, expected: usize, found: usize },

    #[error("line {line}: column `{column}` is not a finite number: {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: duplicate city {name:?}")]
    DuplicateCity { line: u64, name: String },

    #[error("line {line}: unknown panel brand {name:?}")]
    UnknownBrand { line: u64, name: String },

    #[error("line {line}: panel brand {brand} listed more than once")]
    DuplicateBrand { line: u64, brand: PanelBrand },

    #[error("panel catalog is missing brand {0}")]
    MissingBrand(PanelBrand),
}

/// Failure while evaluating a request against loaded reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no reference data: the city table is empty")]
    NoReferenceData,

    /// Only raised by name lookups through `CityTable::get`; resolved
    /// cities come straight from the table.
    #[error("unknown city {0:?}")]
    UnknownCity(String),
}
