use crate::config::NormalizerConfig;
use crate::error::{PrepError, PrepResult};
use regex::Regex;

const URL_PATTERN: &str = r"http\S+|www\S+";
const NUMBER_PATTERN: &str = r"\d+";
const ASCII_PUNCTUATION_PATTERN: &str = r"[^a-zA-Z\s]";
const UNICODE_PUNCTUATION_PATTERN: &str = r"[^\p{L}\s]";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Text cleaning stage: lowercase, strip numbers, URLs and punctuation,
/// squeeze whitespace.
///
/// Digits are removed before URLs. Doing it the other way round lets a digit
/// hide a URL prefix (`ht1tpx` becomes `httpx` only after the URL pass), which
/// would make a second pass change the text again.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    urls: Regex,
    numbers: Regex,
    punctuation: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> PrepResult<Self> {
        let punctuation = if config.ascii_only {
            ASCII_PUNCTUATION_PATTERN
        } else {
            UNICODE_PUNCTUATION_PATTERN
        };

        Ok(Self {
            config: config.clone(),
            urls: compile(URL_PATTERN)?,
            numbers: compile(NUMBER_PATTERN)?,
            punctuation: compile(punctuation)?,
            whitespace: compile(WHITESPACE_PATTERN)?,
        })
    }

    /// Clean `text`. Total: empty input gives empty output.
    pub fn normalize(&self, text: &str) -> String {
        let mut text = if self.config.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        if self.config.strip_numbers {
            text = self.numbers.replace_all(&text, "").into_owned();
        }
        if self.config.strip_urls {
            text = self.urls.replace_all(&text, "").into_owned();
        }
        if self.config.strip_punctuation {
            text = self.punctuation.replace_all(&text, " ").into_owned();
        }

        self.whitespace.replace_all(&text, " ").trim().to_string()
    }

    pub fn name(&self) -> &str {
        "Normalizer"
    }
}

fn compile(pattern: &str) -> PrepResult<Regex> {
    Regex::new(pattern).map_err(|e| PrepError::Config(format!("invalid pattern {pattern}: {e}")))
}
