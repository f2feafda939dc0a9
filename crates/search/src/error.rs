use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
