use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("EMPTY")]
    Empty,
    #[error("CAPACITY_EXCEEDED")]
    CapacityExceeded,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}
