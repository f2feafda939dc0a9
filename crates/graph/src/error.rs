use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph contains a cycle")]
    CycleDetected,
    #[error("vertex {0} is out of range")]
    VertexOutOfRange(usize),
}
