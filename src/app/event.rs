use crate::engine::config::Language;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Transcript(String),
    LoadFile(String),
    LoadClipboard,
    SetLanguage(Language),
    Skip,
    Back,
    Reset,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
