//! Read-only lookup resources: stopword sets and the lemmatization lexicon.
//!
//! Everything here is loaded once, before any text is processed, and bundled
//! into a [`ResourceContext`] that the stages borrow. Loading is the only
//! place the pipeline can fail.

use crate::config::PreprocessConfig;
use crate::error::{PrepError, PrepResult};
use crate::types::{Language, PosTag};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

const ENGLISH_STOPWORDS: &str = include_str!("../resources/stopwords/english.txt");
const ENGLISH_LEXICON: &str = include_str!("../resources/lexicon/english.yaml");

// ===== STOPWORDS =====

/// Fixed set of lowercase stopwords for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Built-in list for a language.
    ///
    /// English uses the embedded NLTK list; every other language comes from
    /// the `stop-words` crate.
    pub fn builtin(language: Language) -> Self {
        match language {
            Language::English => Self::parse_list(ENGLISH_STOPWORDS),
            other => stop_words::get(stop_words_language(other))
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Load a newline separated list. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> PrepResult<Self> {
        if !path.exists() {
            return Err(PrepError::ResourceNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let set = Self::parse_list(&content);
        if set.is_empty() {
            return Err(PrepError::MalformedResource {
                name: path.display().to_string(),
                reason: "stopword list contains no words".to_string(),
            });
        }
        Ok(set)
    }

    fn parse_list(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    pub fn remove(&mut self, word: &str) {
        self.words.remove(&word.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

fn stop_words_language(language: Language) -> stop_words::LANGUAGE {
    match language {
        Language::English => stop_words::LANGUAGE::English,
        Language::German => stop_words::LANGUAGE::German,
        Language::French => stop_words::LANGUAGE::French,
        Language::Spanish => stop_words::LANGUAGE::Spanish,
        Language::Italian => stop_words::LANGUAGE::Italian,
        Language::Portuguese => stop_words::LANGUAGE::Portuguese,
        Language::Dutch => stop_words::LANGUAGE::Dutch,
        Language::Russian => stop_words::LANGUAGE::Russian,
        Language::Swedish => stop_words::LANGUAGE::Swedish,
        Language::Norwegian => stop_words::LANGUAGE::Norwegian,
        Language::Danish => stop_words::LANGUAGE::Danish,
        Language::Finnish => stop_words::LANGUAGE::Finnish,
        Language::Hungarian => stop_words::LANGUAGE::Hungarian,
        Language::Turkish => stop_words::LANGUAGE::Turkish,
        Language::Arabic => stop_words::LANGUAGE::Arabic,
    }
}

// ===== LEXICON =====

#[derive(Debug, Default, Deserialize)]
struct PosTable<T> {
    #[serde(default)]
    noun: T,
    #[serde(default)]
    verb: T,
    #[serde(default)]
    adjective: T,
    #[serde(default)]
    adverb: T,
}

impl<T> PosTable<T> {
    fn into_array(self) -> [T; 4] {
        [self.noun, self.verb, self.adjective, self.adverb]
    }
}

/// On-disk lexicon layout (YAML)
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    language: Option<Language>,
    #[serde(default)]
    base_forms: PosTable<Vec<String>>,
    #[serde(default)]
    exceptions: PosTable<HashMap<String, String>>,
}

/// Lemmatization dictionary: known base forms and irregular forms per POS
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    language: Option<Language>,
    base_forms: [HashSet<String>; 4],
    exceptions: [HashMap<String, String>; 4],
}

fn pos_index(pos: PosTag) -> usize {
    match pos {
        PosTag::Noun => 0,
        PosTag::Verb => 1,
        PosTag::Adjective => 2,
        PosTag::Adverb => 3,
    }
}

impl Lexicon {
    /// Built-in lexicon for a language, if one ships with the crate
    pub fn builtin(language: Language) -> PrepResult<Option<Self>> {
        match language {
            Language::English => {
                Self::from_yaml_str(ENGLISH_LEXICON, "builtin english lexicon").map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn from_file(path: &Path) -> PrepResult<Self> {
        if !path.exists() {
            return Err(PrepError::ResourceNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, &path.display().to_string())
    }

    pub fn from_yaml_str(content: &str, name: &str) -> PrepResult<Self> {
        let file: LexiconFile =
            serde_yaml::from_str(content).map_err(|e| PrepError::MalformedResource {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let base_forms: [HashSet<String>; 4] = file
            .base_forms
            .into_array()
            .map(|words| words.iter().map(|w| w.to_lowercase()).collect());
        let exceptions: [HashMap<String, String>; 4] = file.exceptions.into_array().map(|table| {
            table
                .into_iter()
                .map(|(form, lemma)| (form.to_lowercase(), lemma.to_lowercase()))
                .collect()
        });

        let lexicon = Self {
            language: file.language,
            base_forms,
            exceptions,
        };
        if lexicon.is_empty() {
            return Err(PrepError::MalformedResource {
                name: name.to_string(),
                reason: "lexicon contains no entries".to_string(),
            });
        }
        Ok(lexicon)
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// True if `word` is a known dictionary form for `pos`
    pub fn is_base_form(&self, word: &str, pos: PosTag) -> bool {
        self.base_forms[pos_index(pos)].contains(word)
    }

    /// Lemma of an irregular inflection, if listed
    pub fn exception(&self, word: &str, pos: PosTag) -> Option<&str> {
        self.exceptions[pos_index(pos)].get(word).map(String::as_str)
    }

    /// Number of base forms plus exception entries across all POS
    pub fn len(&self) -> usize {
        self.base_forms.iter().map(HashSet::len).sum::<usize>()
            + self.exceptions.iter().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ===== CONTEXT =====

/// Process-wide resources, built once at startup and shared by reference
#[derive(Debug, Clone)]
pub struct ResourceContext {
    pub language: Language,
    pub stopwords: StopwordSet,
    pub lexicon: Lexicon,
}

impl ResourceContext {
    /// Load every resource named by the config. Fails before any text is processed.
    pub fn load(config: &PreprocessConfig) -> PrepResult<Self> {
        let language = config.language;

        let mut stopwords = if !config.stopwords.enabled {
            StopwordSet::default()
        } else if let Some(path) = &config.stopwords.path {
            StopwordSet::from_file(path)?
        } else {
            StopwordSet::builtin(language)
        };
        if config.stopwords.enabled {
            for word in &config.stopwords.extra {
                stopwords.insert(word);
            }
            for word in &config.stopwords.keep {
                stopwords.remove(word);
            }
        }

        let lexicon = match &config.lemmatizer.lexicon_path {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::builtin(language)?.unwrap_or_else(|| {
                tracing::warn!(%language, "no built-in lexicon, lemmas fall back to the token itself");
                Lexicon::default()
            }),
        };
        if let Some(declared) = lexicon.language().filter(|l| *l != language) {
            tracing::warn!(%language, %declared, "lexicon was written for another language");
        }

        tracing::info!(
            %language,
            stopwords = stopwords.len(),
            lexicon_entries = lexicon.len(),
            "resources loaded"
        );

        Ok(Self {
            language,
            stopwords,
            lexicon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopwordConfig;

    #[test]
    fn test_builtin_english_stopwords_match_nltk_list() {
        let set = StopwordSet::builtin(Language::English);
        assert_eq!(set.len(), 179);
        assert!(set.contains("are"));
        assert!(set.contains("THE"));
        assert!(set.contains("don't"));
        assert!(!set.contains("see"));
        assert!(!set.contains("cats"));
    }

    #[test]
    fn test_builtin_german_stopwords_load() {
        let set = StopwordSet::builtin(Language::German);
        assert!(!set.is_empty());
        assert!(set.contains("und"));
    }

    #[test]
    fn test_missing_stopword_file_is_fatal() {
        let err = StopwordSet::from_file(Path::new("/no/such/stopwords.txt")).unwrap_err();
        assert!(matches!(err, PrepError::ResourceNotFound(_)));
    }

    #[test]
    fn test_builtin_english_lexicon_parses() {
        let lexicon = Lexicon::builtin(Language::English).unwrap().unwrap();
        assert_eq!(lexicon.language(), Some(Language::English));
        assert!(lexicon.is_base_form("cat", PosTag::Noun));
        assert!(lexicon.is_base_form("true", PosTag::Adjective));
        assert_eq!(lexicon.exception("mice", PosTag::Noun), Some("mouse"));
        assert_eq!(lexicon.exception("went", PosTag::Verb), Some("go"));
        assert!(Lexicon::builtin(Language::French).unwrap().is_none());
    }

    #[test]
    fn test_malformed_lexicon_is_reported() {
        let err = Lexicon::from_yaml_str("base_forms: [not, a, table]", "inline").unwrap_err();
        assert!(matches!(err, PrepError::MalformedResource { .. }));

        let err = Lexicon::from_yaml_str("language: english", "inline").unwrap_err();
        assert!(matches!(err, PrepError::MalformedResource { .. }));
    }

    #[test]
    fn test_context_applies_extra_and_keep_words() {
        let config = PreprocessConfig {
            stopwords: StopwordConfig {
                extra: vec!["Lorem".to_string()],
                keep: vec!["not".to_string()],
                ..StopwordConfig::default()
            },
            ..PreprocessConfig::default()
        };
        let ctx = ResourceContext::load(&config).unwrap();
        assert!(ctx.stopwords.contains("lorem"));
        assert!(!ctx.stopwords.contains("not"));
        assert!(ctx.stopwords.contains("the"));
    }

    #[test]
    fn test_context_without_stopwords_is_empty_set() {
        let config = PreprocessConfig {
            stopwords: StopwordConfig {
                enabled: false,
                extra: vec!["ignored".to_string()],
                ..StopwordConfig::default()
            },
            ..PreprocessConfig::default()
        };
        let ctx = ResourceContext::load(&config).unwrap();
        assert!(ctx.stopwords.is_empty());
    }
}
