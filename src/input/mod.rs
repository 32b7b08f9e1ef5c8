use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Transcript is empty: {0}")]
    EmptyTranscript(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Transcripts pulled from an outside source, one utterance per line
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTranscripts {
    pub lines: Vec<String>,
    pub source: String,
}

/// Split raw text into utterances. Blank lines and `#` comments are dropped.
pub fn split_transcripts(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub mod clipboard;
pub mod file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_transcripts_drops_blanks_and_comments() {
        let text = "# morning readings\nmia moja ishirini\n\n  yes  \nthemanini\n";
        assert_eq!(
            split_transcripts(text),
            vec!["mia moja ishirini", "yes", "themanini"]
        );
    }

    #[test]
    fn test_split_transcripts_empty() {
        assert!(split_transcripts("\n  \n# only a comment").is_empty());
    }

    #[test]
    fn test_load_error_messages() {
        let err = LoadError::EmptyTranscript("clipboard".to_string());
        assert_eq!(err.to_string(), "Transcript is empty: clipboard");
        let err = LoadError::Clipboard("no display".to_string());
        assert!(matches!(err, LoadError::Clipboard(msg) if msg.contains("display")));
    }
}
