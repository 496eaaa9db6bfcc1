use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Transport Error: {0}")]
    Transport(String),

    #[error("HTTP request failed with status code {status}")]
    HttpStatus { status: u16, body: String },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
