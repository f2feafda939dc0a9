use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("EMPTY_HEAP")]
    EmptyHeap,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
