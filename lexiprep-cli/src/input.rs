use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Where the text to preprocess comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Literal text passed on the command line
    Text(String),
    /// UTF-8 file
    File(PathBuf),
    /// Everything on standard input
    Stdin,
}

impl InputSource {
    /// `--text` wins over `--input`; with neither, read stdin
    pub fn from_args(text: Option<&str>, input: Option<&str>) -> Self {
        match (text, input) {
            (Some(text), _) => InputSource::Text(text.to_string()),
            (None, Some("-")) | (None, None) => InputSource::Stdin,
            (None, Some(path)) => InputSource::File(PathBuf::from(path)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Text(_) => "command line".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}

pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_takes_precedence() {
        let source = InputSource::from_args(Some("hello"), Some("file.txt"));
        assert_eq!(source, InputSource::Text("hello".to_string()));
        assert_eq!(read_input(&source).unwrap(), "hello");
    }

    #[test]
    fn test_dash_and_nothing_mean_stdin() {
        assert_eq!(InputSource::from_args(None, Some("-")), InputSource::Stdin);
        assert_eq!(InputSource::from_args(None, None), InputSource::Stdin);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join("lexiprep_cli_input.txt");
        std::fs::write(&path, "Cats are running").unwrap();

        let source = InputSource::from_args(None, path.to_str());
        assert_eq!(read_input(&source).unwrap(), "Cats are running");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_has_context() {
        let source = InputSource::File(PathBuf::from("/no/such/input.txt"));
        let err = read_input(&source).unwrap_err();
        assert!(err.to_string().contains("/no/such/input.txt"));
    }
}
