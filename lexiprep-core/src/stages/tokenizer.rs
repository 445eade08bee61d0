use unicode_segmentation::UnicodeSegmentation;

/// Whitespace tokenizer that trims each chunk to its Unicode words (UAX #29).
///
/// A chunk keeps everything from its first word to its last, so inner
/// hyphens and apostrophes survive while edge punctuation is dropped.
/// Chunks without a word never become tokens. Scripts written without
/// spaces stay one token per chunk instead of splitting per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(word_span)
            .map(str::to_string)
            .collect()
    }

    pub fn name(&self) -> &str {
        "Tokenizer"
    }
}

/// Slice of `chunk` from the start of its first word to the end of its last
fn word_span(chunk: &str) -> Option<&str> {
    let mut words = chunk.unicode_word_indices();
    let (start, first) = words.next()?;
    let end = words
        .last()
        .map_or(start + first.len(), |(i, word)| i + word.len());
    Some(&chunk[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_normalized_text() {
        let tokens = Tokenizer::new().tokenize("cats are running quickly see");
        assert_eq!(tokens, vec!["cats", "are", "running", "quickly", "see"]);
    }

    #[test]
    fn test_empty_input_gives_no_tokens() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tokenize("   ").is_empty());
    }

    #[test]
    fn test_punctuation_is_not_a_token() {
        let tokens = Tokenizer::new().tokenize("Hello, world! (nlp) -- ...");
        assert_eq!(tokens, vec!["Hello", "world", "nlp"]);
    }

    #[test]
    fn test_inner_punctuation_stays() {
        let tokens = Tokenizer::new().tokenize("state-of-the-art isn't");
        assert_eq!(tokens, vec!["state-of-the-art", "isn't"]);
    }

    #[test]
    fn test_non_ascii_words() {
        let tokens = Tokenizer::new().tokenize("café naïve straße");
        assert_eq!(tokens, vec!["café", "naïve", "straße"]);
    }

    #[test]
    fn test_unspaced_scripts_stay_whole() {
        let tokens = Tokenizer::new().tokenize("日本語 テキスト");
        assert_eq!(tokens, vec!["日本語", "テキスト"]);
    }
}
