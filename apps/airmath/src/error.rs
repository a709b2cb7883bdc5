use std::io;
use thiserror::Error;

/// Main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Math error: {0}")]
    Math(#[from] am_math::MathError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}
