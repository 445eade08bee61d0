use super::porter::PorterStemmer;
use super::traits::TokenTransform;
use crate::error::{PrepError, PrepResult};
use crate::types::{Language, StemmerAlgorithm};
use rust_stemmers::Algorithm;
use std::fmt;

enum Backend {
    Porter(PorterStemmer),
    Snowball(rust_stemmers::Stemmer),
    Identity,
}

/// Stemmer for the configured language and algorithm.
///
/// Pure suffix stripping: the stem is not guaranteed to be a real word
/// (`quickly` -> `quickli` with Porter, `studies` -> `studi` with either).
pub struct Stemmer {
    language: Language,
    algorithm: StemmerAlgorithm,
    backend: Backend,
}

impl Stemmer {
    /// `algorithm` None picks Porter for English and Snowball otherwise.
    /// Porter for any other language is a config error.
    pub fn new(language: Language, algorithm: Option<StemmerAlgorithm>) -> PrepResult<Self> {
        let algorithm = algorithm.unwrap_or_else(|| StemmerAlgorithm::default_for(language));
        let backend = match algorithm {
            StemmerAlgorithm::Porter if language != Language::English => {
                return Err(PrepError::Config(format!(
                    "the porter stemmer only supports english, not {language}"
                )));
            }
            StemmerAlgorithm::Porter => Backend::Porter(PorterStemmer::new()),
            StemmerAlgorithm::Snowball => {
                Backend::Snowball(rust_stemmers::Stemmer::create(snowball_algorithm(language)))
            }
        };

        Ok(Self {
            language,
            algorithm,
            backend,
        })
    }

    /// Stemmer that returns every token unchanged
    pub fn disabled(language: Language) -> Self {
        Self {
            language,
            algorithm: StemmerAlgorithm::default_for(language),
            backend: Backend::Identity,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn algorithm(&self) -> StemmerAlgorithm {
        self.algorithm
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.backend, Backend::Identity)
    }
}

impl TokenTransform for Stemmer {
    fn transform(&self, token: &str) -> String {
        match &self.backend {
            Backend::Porter(porter) => porter.stem(token),
            Backend::Snowball(stemmer) => stemmer.stem(token).into_owned(),
            Backend::Identity => token.to_string(),
        }
    }

    fn name(&self) -> &str {
        match self.algorithm {
            StemmerAlgorithm::Porter => "PorterStemmer",
            StemmerAlgorithm::Snowball => "SnowballStemmer",
        }
    }
}

impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stemmer")
            .field("language", &self.language)
            .field("algorithm", &self.algorithm)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

fn snowball_algorithm(language: Language) -> Algorithm {
    match language {
        Language::English => Algorithm::English,
        Language::German => Algorithm::German,
        Language::French => Algorithm::French,
        Language::Spanish => Algorithm::Spanish,
        Language::Italian => Algorithm::Italian,
        Language::Portuguese => Algorithm::Portuguese,
        Language::Dutch => Algorithm::Dutch,
        Language::Russian => Algorithm::Russian,
        Language::Swedish => Algorithm::Swedish,
        Language::Norwegian => Algorithm::Norwegian,
        Language::Danish => Algorithm::Danish,
        Language::Finnish => Algorithm::Finnish,
        Language::Hungarian => Algorithm::Hungarian,
        Language::Turkish => Algorithm::Turkish,
        Language::Arabic => Algorithm::Arabic,
    }
}
