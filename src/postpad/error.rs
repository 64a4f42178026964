use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostpadError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

pub type Result<T> = std::result::Result<T, PostpadError>;

/// Rejected form submission. Shown to the user as a blocking alert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both a title and content.")]
    MissingFields,
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please enter some content.")]
    MissingContent,
}
