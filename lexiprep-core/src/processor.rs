use crate::config::PreprocessConfig;
use crate::error::PrepResult;
use crate::resources::ResourceContext;
use crate::stages::{Lemmatizer, Normalizer, Stemmer, StopwordFilter, TokenTransform, Tokenizer};
use crate::types::*;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Simple profiler that collects timings for pipeline steps
#[derive(Debug, Default)]
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        tracing::debug!(step = step_name, elapsed_us = elapsed.as_micros() as u64, "step finished");
        self.timings.push((step_name.to_string(), elapsed));

        result
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, d)| *d).sum()
    }

    /// Timing table on stderr, so it never mixes with a report on stdout
    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        eprintln!("\n📊 Performance Summary:");
        let total = self.total();

        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            eprintln!(
                "   {:.<35} {}µs ({:.1}%)",
                step,
                duration.as_micros(),
                percentage
            );
        }
        eprintln!("   {:.<35} {}µs", "Total", total.as_micros());
    }
}

/// The five-stage preprocessing pipeline.
///
/// Holds the resources loaded at startup and the stateless stages built from
/// the config. `process` never fails; every error happens in `new`.
#[derive(Debug)]
pub struct TextPreprocessor {
    config: PreprocessConfig,
    resources: ResourceContext,
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    stemmer: Stemmer,
}

impl TextPreprocessor {
    /// Load resources for `config` and build the stages
    pub fn new(config: PreprocessConfig) -> PrepResult<Self> {
        let resources = ResourceContext::load(&config)?;
        Self::with_resources(config, resources)
    }

    /// Build the stages around resources that were loaded elsewhere
    pub fn with_resources(config: PreprocessConfig, resources: ResourceContext) -> PrepResult<Self> {
        let normalizer = Normalizer::new(&config.normalizer)?;
        let stemmer = if config.stemmer.enabled {
            Stemmer::new(resources.language, config.stemmer.algorithm)?
        } else {
            Stemmer::disabled(resources.language)
        };
        tracing::debug!(
            normalizer = normalizer.name(),
            stemmer = stemmer.name(),
            language = %resources.language,
            "pipeline stages ready"
        );

        Ok(Self {
            config,
            resources,
            normalizer,
            tokenizer: Tokenizer::new(),
            stemmer,
        })
    }

    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    pub fn resources(&self) -> &ResourceContext {
        &self.resources
    }

    // ===== INDIVIDUAL STAGES =====

    pub fn normalize(&self, raw_text: &str) -> String {
        self.normalizer.normalize(raw_text)
    }

    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        self.tokenizer.tokenize(normalized)
    }

    pub fn remove_stopwords(&self, tokens: &[String]) -> Vec<String> {
        self.stopword_filter().filter(tokens)
    }

    pub fn stopword_filter(&self) -> StopwordFilter<'_> {
        StopwordFilter::new(&self.resources.stopwords)
    }

    pub fn stem(&self, tokens: &[String]) -> Vec<String> {
        self.stemmer.apply(tokens)
    }

    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        self.lemmatizer().apply(tokens)
    }

    pub fn lemmatizer(&self) -> Lemmatizer<'_> {
        Lemmatizer::new(&self.resources.lexicon)
            .with_default_pos(self.config.lemmatizer.default_pos)
            .with_enabled(self.config.lemmatizer.enabled)
    }

    // ===== ORCHESTRATION =====

    /// Run all stages on `raw_text`, profiling when the config asks for it
    pub fn process(&self, raw_text: &str) -> PipelineReport {
        let mut profiler = StepProfiler::new(self.config.profile);
        let report = self.process_with_profiler(raw_text, &mut profiler);
        profiler.print_summary();
        report
    }

    /// Run all stages, timing each one with `profiler`
    pub fn process_with_profiler(
        &self,
        raw_text: &str,
        profiler: &mut StepProfiler,
    ) -> PipelineReport {
        // Stage 1: Normalize
        let label = format!("1. {}", self.normalizer.name());
        let cleaned = profiler.time_step(&label, || self.normalize(raw_text));

        // Stage 2: Tokenize
        let label = format!("2. {}", self.tokenizer.name());
        let tokens = profiler.time_step(&label, || self.tokenize(&cleaned));

        // Stage 3: Stopword removal
        let filter = self.stopword_filter();
        let label = format!("3. {}", filter.name());
        let filtered = profiler.time_step(&label, || filter.filter(&tokens));

        // Stage 4 + 5: derived forms of the surviving tokens
        let label = format!("4. {}", self.stemmer.name());
        let stems = profiler.time_step(&label, || self.stem(&filtered));
        let lemmatizer = self.lemmatizer();
        let label = format!("5. {}", lemmatizer.name());
        let lemmas = profiler.time_step(&label, || lemmatizer.apply(&filtered));

        let stats = PipelineStats {
            token_count: tokens.len(),
            unique_tokens: tokens.iter().collect::<HashSet<_>>().len(),
            filtered_count: filtered.len(),
            removed_count: tokens.len() - filtered.len(),
        };

        let comparison: Vec<ComparisonRow> = filtered
            .iter()
            .zip(stems.iter())
            .zip(lemmas.iter())
            .map(|((surface, stem), lemma)| ComparisonRow {
                surface_form: surface.clone(),
                stem: stem.clone(),
                lemma: lemma.clone(),
            })
            .collect();

        tracing::debug!(
            tokens = stats.token_count,
            kept = stats.filtered_count,
            removed = stats.removed_count,
            "pipeline finished"
        );

        PipelineReport {
            schema_version: SCHEMA_VERSION.to_string(),
            language: self.resources.language,
            original: raw_text.trim().to_string(),
            snapshots: vec![
                PipelineSnapshot::text(Stage::Normalize, cleaned),
                PipelineSnapshot::tokens(Stage::Tokenize, tokens),
                PipelineSnapshot::tokens(Stage::StopwordFilter, filtered),
                PipelineSnapshot::tokens(Stage::Stem, stems),
                PipelineSnapshot::tokens(Stage::Lemmatize, lemmas),
            ],
            comparison,
            stats,
        }
    }
}
