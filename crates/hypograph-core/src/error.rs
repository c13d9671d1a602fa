use thiserror::Error;

#[derive(Error, Debug)]
pub enum HypoGraphError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, HypoGraphError>;
