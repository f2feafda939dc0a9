use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("EMPTY_TREE")]
    EmptyTree,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("task {0} is already scheduled")]
    DuplicateTask(u32),
    #[error("task {0} is not scheduled")]
    UnknownTask(u32),
}
