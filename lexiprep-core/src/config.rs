use crate::error::{PrepError, PrepResult};
use crate::types::{Language, PosTag, StemmerAlgorithm};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// Default value functions for serde
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Language used for stopwords and stemming
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub stopwords: StopwordConfig,
    #[serde(default)]
    pub stemmer: StemmerConfig,
    #[serde(default)]
    pub lemmatizer: LemmatizerConfig,
    /// Record per-stage timings while processing
    #[serde(default)]
    pub profile: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Remove `http...` and `www...` runs
    #[serde(default = "default_true")]
    pub strip_urls: bool,
    /// Remove digit sequences
    #[serde(default = "default_true")]
    pub strip_numbers: bool,
    /// Replace every non-letter, non-space character with a space
    #[serde(default = "default_true")]
    pub strip_punctuation: bool,
    /// Only ASCII a-z count as letters (non-ASCII letters are stripped)
    #[serde(default = "default_true")]
    pub ascii_only: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_urls: true,
            strip_numbers: true,
            strip_punctuation: true,
            ascii_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopwordConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Newline separated stopword file replacing the built-in list
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Words added on top of the list
    #[serde(default)]
    pub extra: Vec<String>,
    /// Words that are never removed, even if listed
    #[serde(default)]
    pub keep: Vec<String>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            extra: Vec::new(),
            keep: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemmerConfig {
    /// When disabled every token is its own stem
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// `porter` or `snowball`. None picks Porter for English and
    /// Snowball for every other language.
    #[serde(default)]
    pub algorithm: Option<StemmerAlgorithm>,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            algorithm: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmatizerConfig {
    /// When disabled every token is its own lemma
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// YAML lexicon replacing the built-in one
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Part of speech assumed for untagged tokens.
    /// None tries noun, verb, adjective, adverb in that order.
    #[serde(default)]
    pub default_pos: Option<PosTag>,
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lexicon_path: None,
            default_pos: None,
        }
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            normalizer: NormalizerConfig::default(),
            stopwords: StopwordConfig::default(),
            stemmer: StemmerConfig::default(),
            lemmatizer: LemmatizerConfig::default(),
            profile: false,
        }
    }
}

impl PreprocessConfig {
    /// Load config from a YAML file. Missing or malformed files are errors.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        let config: PreprocessConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {path}"))?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Built-in named configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    presets: BTreeMap<String, PreprocessConfig>,
}

impl ConfigManager {
    pub fn new() -> Self {
        let mut manager = Self {
            presets: BTreeMap::new(),
        };
        manager.load_builtin_presets();
        manager
    }

    pub fn get_preset(&self, name: &str) -> PrepResult<&PreprocessConfig> {
        self.presets
            .get(name)
            .ok_or_else(|| PrepError::Config(format!("unknown preset '{name}'")))
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    fn load_builtin_presets(&mut self) {
        // Classic English cleaning, same as the defaults
        self.presets
            .insert("classic".to_string(), PreprocessConfig::default());

        // Keep every word, only normalize and derive forms
        let keep_all = PreprocessConfig {
            stopwords: StopwordConfig {
                enabled: false,
                ..StopwordConfig::default()
            },
            ..PreprocessConfig::default()
        };
        self.presets.insert("keep-stopwords".to_string(), keep_all);

        // Non-ASCII letters survive cleaning (needed for most non-English text)
        let unicode = PreprocessConfig {
            normalizer: NormalizerConfig {
                ascii_only: false,
                ..NormalizerConfig::default()
            },
            ..PreprocessConfig::default()
        };
        self.presets.insert("unicode".to_string(), unicode);

        // NLTK's WordNetLemmatizer treats untagged words as nouns
        let noun_lemmas = PreprocessConfig {
            lemmatizer: LemmatizerConfig {
                default_pos: Some(PosTag::Noun),
                ..LemmatizerConfig::default()
            },
            ..PreprocessConfig::default()
        };
        self.presets.insert("noun-lemmas".to_string(), noun_lemmas);
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: PreprocessConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PreprocessConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "language: german\nnormalizer:\n  ascii_only: false\nlemmatizer:\n  default_pos: verb\n";
        let config: PreprocessConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.language, Language::German);
        assert!(!config.normalizer.ascii_only);
        assert!(config.normalizer.strip_urls);
        assert!(config.stopwords.enabled);
        assert_eq!(config.lemmatizer.default_pos, Some(PosTag::Verb));
    }

    #[test]
    fn test_yaml_roundtrip_is_stable() {
        let config = ConfigManager::new().get_preset("unicode").unwrap().clone();
        let yaml = config.to_yaml().unwrap();
        let parsed: PreprocessConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_preset_is_config_error() {
        let manager = ConfigManager::new();
        assert!(matches!(
            manager.get_preset("nope"),
            Err(PrepError::Config(_))
        ));
        assert!(manager.preset_names().any(|n| n == "classic"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = PreprocessConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("lexiprep-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.yaml");
        std::fs::write(&path, "language: [klingon\n").unwrap();

        let result = PreprocessConfig::load_from_file(path.to_str().unwrap());
        assert!(result.is_err());

        std::fs::write(&path, "language: german\nstemmer:\n  algorithm: snowball\n").unwrap();
        let config = PreprocessConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.language, Language::German);
        assert_eq!(config.stemmer.algorithm, Some(StemmerAlgorithm::Snowball));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_stemmer_algorithm_is_optional() {
        let config: PreprocessConfig = serde_yaml::from_str("stemmer:\n  enabled: true\n").unwrap();
        assert_eq!(config.stemmer.algorithm, None);

        let config: PreprocessConfig =
            serde_yaml::from_str("stemmer:\n  algorithm: porter\n").unwrap();
        assert!(config.stemmer.enabled);
        assert_eq!(config.stemmer.algorithm, Some(StemmerAlgorithm::Porter));
    }
}
