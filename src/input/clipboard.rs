use super::{split_transcripts, LoadError, LoadedTranscripts};

/// Read transcript text copied from a speech-to-text tool.
pub fn load() -> Result<LoadedTranscripts, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    from_text(&text)
}

fn from_text(text: &str) -> Result<LoadedTranscripts, LoadError> {
    let lines = split_transcripts(text);
    if lines.is_empty() {
        return Err(LoadError::EmptyTranscript("clipboard".to_string()));
    }

    Ok(LoadedTranscripts {
        lines,
        source: "clipboard".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_lines() {
        let loaded = from_text("seventy two\r\nyes\r\n").unwrap();
        assert_eq!(loaded.lines, vec!["seventy two", "yes"]);
        assert_eq!(loaded.source, "clipboard");
    }

    #[test]
    fn test_from_text_empty_is_error() {
        assert!(matches!(
            from_text("   "),
            Err(LoadError::EmptyTranscript(_))
        ));
    }
}
