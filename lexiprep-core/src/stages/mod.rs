//! Pipeline stages
//!
//! Each stage is a small, pure transform that can be used and tested on its
//! own. The [`crate::processor::TextPreprocessor`] composes them.
//!
//! ## Flow
//!
//! ```text
//! RawText
//!     ↓
//! [Normalizer]        lowercase, strip numbers / URLs / punctuation, squeeze spaces
//!     ↓
//! [Tokenizer]         whitespace chunks trimmed to Unicode words
//!     ↓
//! [StopwordFilter]    drop listed words, keep order
//!     ↓
//! [Stemmer]           one stem per token (Porter or Snowball)
//! [Lemmatizer]        one lemma per token
//! ```

pub mod lemmatizer;
pub mod normalizer;
pub mod porter;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

// Re-export main types
pub use lemmatizer::Lemmatizer;
pub use normalizer::Normalizer;
pub use porter::PorterStemmer;
pub use stemmer::Stemmer;
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;
pub use traits::TokenTransform;
