use crate::engine::logging::LoggingError;
use crate::input::LoadError;
use std::io;
use thiserror::Error;

/// Top-level error for the terminal application
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}
