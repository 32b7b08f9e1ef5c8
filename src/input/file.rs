use super::{split_transcripts, LoadError, LoadedTranscripts};
use std::path::Path;

/// Load a transcript file for replay, one utterance per line.
pub fn load(path: &str) -> Result<LoadedTranscripts, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let lines = split_transcripts(&content);
    if lines.is_empty() {
        return Err(LoadError::EmptyTranscript(path.display().to_string()));
    }

    Ok(LoadedTranscripts {
        lines,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/readings.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert!(matches!(load(&path), Err(LoadError::EmptyTranscript(_))));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one two zero").unwrap();
        writeln!(file, "yes").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.lines, vec!["one two zero", "yes"]);
        assert!(loaded.source.starts_with("file:"));
    }
}
