use thiserror::Error;

/// Failures raised by the indicator engine.
///
/// An undefined value inside a series is not an error; it is carried as
/// `None` in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A required field is missing, non-numeric, or misaligned with its peers.
    #[error("schema error: field `{field}` is missing or not numeric")]
    Schema { field: String },

    /// Input shorter than the indicator's minimum, or a zero-sized window.
    #[error("insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

impl IndicatorError {
    pub fn schema(field: impl Into<String>) -> Self {
        IndicatorError::Schema {
            field: field.into(),
        }
    }

    pub fn insufficient(required: usize, actual: usize) -> Self {
        IndicatorError::InsufficientData { required, actual }
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
