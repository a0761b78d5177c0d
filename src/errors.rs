use thiserror::Error;


/// Errors raised by the indexed priority queue
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("extract from an empty priority queue")]
    Empty, // Nothing left to settle
    #[error("priority update for an item that is not queued")]
    MissingItem,
}

/// Errors raised while planning or evaluating routes
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node at path position {position} has no edge to its successor")]
    MalformedPath { position: usize },
    #[error("negative edge length {length}")]
    NegativeEdgeLength { length: f64 },
    #[error("edge length cannot be represented as a real number")]
    InvalidEdgeLength,
    #[error("search state has no record at index {index}")]
    MissingState { index: usize },
    #[error("parent chain loops back through index {index}")]
    ParentCycle { index: usize },
    #[error("neighbor signal must be a non-negative number, got {signal}")]
    InvalidSignal { signal: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error("position cursor rejected a move: {0}")]
    Cursor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while building an in-memory graph
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node {0} does not exist")]
    UnknownNode(usize),
    #[error("edge length must be a finite non-negative number, got {0}")]
    InvalidLength(f64),
}
