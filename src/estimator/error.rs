use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("Unrecognized activity level: '{0}' (expected sedentary, moderate or active)")]
    UnrecognizedActivityLevel(String),

    #[error("Unrecognized sex: '{0}' (expected male or female)")]
    UnrecognizedSex(String),

    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
