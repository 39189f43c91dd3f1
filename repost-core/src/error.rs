use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepostError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Outcomes a handler reports back to the user rather than to the process.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("You are not authorized to use this command.")]
    Unauthorized,

    #[error("No posts available.")]
    EmptyStore,

    #[error("Redelivery failed: {0}")]
    Redelivery(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),
}

pub type Result<T> = std::result::Result<T, RepostError>;
