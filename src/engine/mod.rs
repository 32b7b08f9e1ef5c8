pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, Language};
pub use error::VoiceError;
