// Lexiprep Core Library
//
// Step-by-step NLP preprocessing: normalize, tokenize, drop stopwords, stem
// and lemmatize, keeping a snapshot of every stage for comparison.

pub mod config;
pub mod error;
pub mod processor;
pub mod report;
pub mod resources;
pub mod stages;
pub mod types;

// Re-export main types and functions for easy use
pub use config::{ConfigManager, PreprocessConfig};
pub use error::{PrepError, PrepResult};
pub use processor::{StepProfiler, TextPreprocessor};
pub use report::{format_list, ReportFormat};
pub use resources::{Lexicon, ResourceContext, StopwordSet};
pub use types::*;
