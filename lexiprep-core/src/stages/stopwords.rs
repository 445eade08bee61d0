use crate::resources::StopwordSet;

/// Removes tokens found in a [`StopwordSet`], keeping the order of survivors
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter<'a> {
    stopwords: &'a StopwordSet,
}

impl<'a> StopwordFilter<'a> {
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Tokens whose lowercase form is not a stopword. Survivors are not modified.
    pub fn filter(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.is_stopword(token))
            .cloned()
            .collect()
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn name(&self) -> &str {
        "StopwordFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_removes_english_stopwords_in_order() {
        let set = StopwordSet::builtin(Language::English);
        let filter = StopwordFilter::new(&set);
        let out = filter.filter(&tokens(&["cats", "are", "running", "quickly", "see"]));
        assert_eq!(out, vec!["cats", "running", "quickly", "see"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_survivors_untouched() {
        let set: StopwordSet = ["the", "is"].into_iter().collect();
        let filter = StopwordFilter::new(&set);
        let out = filter.filter(&tokens(&["The", "Sky", "IS", "Blue"]));
        assert_eq!(out, vec!["Sky", "Blue"]);
        assert!(filter.is_stopword("THE"));
    }

    #[test]
    fn test_all_stopwords_gives_empty_sequence() {
        let set = StopwordSet::builtin(Language::English);
        let filter = StopwordFilter::new(&set);
        assert!(filter.filter(&tokens(&["the", "and", "of"])).is_empty());
        assert!(filter.filter(&[]).is_empty());
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let set = StopwordSet::default();
        let filter = StopwordFilter::new(&set);
        let input = tokens(&["the", "cat"]);
        assert_eq!(filter.filter(&input), input);
    }
}
