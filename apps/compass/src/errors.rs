#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
/// Bad rating input is recovered inside the prompt loop and never surfaces
/// here; only unrecoverable stream conditions reach `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input stream closed before a valid rating was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
