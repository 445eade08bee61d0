// Per-token transform abstraction
//
// Stemming and lemmatization both map every surviving token to exactly one
// derived form. This trait captures that boundary so the orchestrator and the
// tests can treat them uniformly.

/// One-to-one token transform
///
/// Implementations must be deterministic: the same token always yields the
/// same output, with no state carried between calls.
pub trait TokenTransform {
    /// Derive the form of a single token
    fn transform(&self, token: &str) -> String;

    /// Transform a whole sequence. Length and order are preserved.
    fn apply(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.transform(token)).collect()
    }

    /// Stage name for logging and profiling
    fn name(&self) -> &str;
}
