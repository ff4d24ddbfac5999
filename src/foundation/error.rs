/// Convenience result type used across facepipe.
pub type FacepipeResult<T> = Result<T, FacepipeError>;

/// Top-level error taxonomy used by the import pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FacepipeError {
    /// The CSV source could not be opened or decoded as UTF-8 text.
    #[error("io error: {0}")]
    Io(String),

    /// A field that must be numeric is not, or a data row is shorter than the header.
    #[error("parse error: {reason} (row {row}, column {column}, value {value:?})")]
    Parse {
        /// 0-based data row index (the header is not counted).
        row: usize,
        /// 0-based column index.
        column: usize,
        /// Offending field, empty when the field is missing.
        value: String,
        /// Short cause, e.g. "value not numeric".
        reason: &'static str,
    },

    /// No usable rate could be estimated and no fallback was supplied.
    #[error("rate unavailable: {0}")]
    RateUnavailable(String),

    /// A non-positive or non-finite rate was passed to a retiming operation.
    #[error("invalid rate: {0}")]
    InvalidRate(String),

    /// Two header columns normalize to the same channel name.
    #[error("duplicate channel: {0}")]
    DuplicateChannel(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Cause attached to [`FacepipeError::Parse`] for non-numeric weights.
pub const VALUE_NOT_NUMERIC: &str = "value not numeric";

/// Cause attached to [`FacepipeError::Parse`] for ragged data rows.
pub const ROW_TOO_SHORT: &str = "row too short for channel count";

impl FacepipeError {
    /// Build a [`FacepipeError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`FacepipeError::Parse`] value for a non-numeric field.
    pub fn not_numeric(row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column,
            value: value.into(),
            reason: VALUE_NOT_NUMERIC,
        }
    }

    /// Build a [`FacepipeError::Parse`] value for a row missing `column`.
    pub fn row_too_short(row: usize, column: usize) -> Self {
        Self::Parse {
            row,
            column,
            value: String::new(),
            reason: ROW_TOO_SHORT,
        }
    }

    /// Build a [`FacepipeError::RateUnavailable`] value.
    pub fn rate_unavailable(msg: impl Into<String>) -> Self {
        Self::RateUnavailable(msg.into())
    }

    /// Build a [`FacepipeError::InvalidRate`] value.
    pub fn invalid_rate(msg: impl Into<String>) -> Self {
        Self::InvalidRate(msg.into())
    }

    /// Build a [`FacepipeError::DuplicateChannel`] value.
    pub fn duplicate_channel(msg: impl Into<String>) -> Self {
        Self::DuplicateChannel(msg.into())
    }

    /// Build a [`FacepipeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
