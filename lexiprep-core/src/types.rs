use serde::{Deserialize, Serialize};
use std::fmt;

/// The report schema version stamped on every JSON output.
/// Bump this when the output shape changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

// ===== LANGUAGE & PART OF SPEECH =====

/// Target language. Selects the stopword list and the stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Hungarian,
    Turkish,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Russian,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Hungarian,
        Language::Turkish,
        Language::Arabic,
    ];

    /// Parse a language name or ISO 639-1 code ("en", "english", "de", ...)
    pub fn parse(name: &str) -> Option<Self> {
        let lang = match name.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            "sv" | "swedish" => Language::Swedish,
            "no" | "norwegian" => Language::Norwegian,
            "da" | "danish" => Language::Danish,
            "fi" | "finnish" => Language::Finnish,
            "hu" | "hungarian" => Language::Hungarian,
            "tr" | "turkish" => Language::Turkish,
            "ar" | "arabic" => Language::Arabic,
            _ => return None,
        };
        Some(lang)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
            Language::Russian => "russian",
            Language::Swedish => "swedish",
            Language::Norwegian => "norwegian",
            Language::Danish => "danish",
            Language::Finnish => "finnish",
            Language::Hungarian => "hungarian",
            Language::Turkish => "turkish",
            Language::Arabic => "arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse part-of-speech classes known to the lemmatizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosTag {
    /// Lookup order used when a token carries no tag
    pub const AUTO_ORDER: [PosTag; 4] = [
        PosTag::Noun,
        PosTag::Verb,
        PosTag::Adjective,
        PosTag::Adverb,
    ];
}

/// Stemming algorithm. Porter exists for English only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerAlgorithm {
    Porter,
    Snowball,
}

impl StemmerAlgorithm {
    /// Porter for English, Snowball everywhere else
    pub fn default_for(language: Language) -> Self {
        match language {
            Language::English => StemmerAlgorithm::Porter,
            _ => StemmerAlgorithm::Snowball,
        }
    }
}

// ===== PIPELINE OUTPUT TYPES =====

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Normalize,
    Tokenize,
    StopwordFilter,
    Stem,
    Lemmatize,
}

impl Stage {
    pub const ORDER: [Stage; 5] = [
        Stage::Normalize,
        Stage::Tokenize,
        Stage::StopwordFilter,
        Stage::Stem,
        Stage::Lemmatize,
    ];

    /// Section title used by the text renderers
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Normalize => "Cleaned Text",
            Stage::Tokenize => "Tokens",
            Stage::StopwordFilter => "Tokens without Stopwords",
            Stage::Stem => "Stemmed Tokens",
            Stage::Lemmatize => "Lemmatized Tokens",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Normalize => "normalize",
            Stage::Tokenize => "tokenize",
            Stage::StopwordFilter => "stopword_filter",
            Stage::Stem => "stem",
            Stage::Lemmatize => "lemmatize",
        };
        f.write_str(name)
    }
}

/// What a stage produced: the cleaned string or a token sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SnapshotContent {
    Text(String),
    Tokens(Vec<String>),
}

impl SnapshotContent {
    /// Number of word units in this snapshot (whitespace words for text)
    pub fn len(&self) -> usize {
        match self {
            SnapshotContent::Text(text) => text.split_whitespace().count(),
            SnapshotContent::Tokens(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            SnapshotContent::Tokens(tokens) => Some(tokens),
            SnapshotContent::Text(_) => None,
        }
    }
}

/// Output captured after one stage. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    pub stage: Stage,
    pub content: SnapshotContent,
}

impl PipelineSnapshot {
    pub fn text(stage: Stage, text: String) -> Self {
        Self {
            stage,
            content: SnapshotContent::Text(text),
        }
    }

    pub fn tokens(stage: Stage, tokens: Vec<String>) -> Self {
        Self {
            stage,
            content: SnapshotContent::Tokens(tokens),
        }
    }
}

/// One row of the comparison table: a surviving word and its derived forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub surface_form: String,
    pub stem: String,
    pub lemma: String,
}

/// Counts shown next to the token sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PipelineStats {
    /// Tokens produced by the tokenizer
    pub token_count: usize,
    /// Distinct tokens produced by the tokenizer
    pub unique_tokens: usize,
    /// Tokens left after stopword removal
    pub filtered_count: usize,
    /// Tokens removed as stopwords
    pub removed_count: usize,
}

/// Full result of one `process` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub schema_version: String,
    pub language: Language,
    /// Input text with surrounding whitespace trimmed
    pub original: String,
    /// One snapshot per stage, in execution order
    pub snapshots: Vec<PipelineSnapshot>,
    pub comparison: Vec<ComparisonRow>,
    pub stats: PipelineStats,
}

impl PipelineReport {
    pub fn snapshot(&self, stage: Stage) -> Option<&PipelineSnapshot> {
        self.snapshots.iter().find(|s| s.stage == stage)
    }

    /// Normalized text, or "" if the normalize snapshot is missing
    pub fn cleaned(&self) -> &str {
        match self.snapshot(Stage::Normalize).map(|s| &s.content) {
            Some(SnapshotContent::Text(text)) => text,
            _ => "",
        }
    }

    /// Token sequence captured after `stage` (empty for the text stage)
    pub fn tokens_at(&self, stage: Stage) -> &[String] {
        self.snapshot(stage)
            .and_then(|s| s.content.as_tokens())
            .unwrap_or(&[])
    }
}
