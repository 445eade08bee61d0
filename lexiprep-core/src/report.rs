use crate::types::*;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const NO_TOKENS: &str = "(no tokens)";

/// Output formats for a [`PipelineReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Sectioned, human-readable walk through every stage
    #[default]
    Text,
    /// Comparison table only
    Table,
    /// Full report as pretty JSON
    Json,
}

impl ReportFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "table" => Some(ReportFormat::Table),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Token list as one token per line, or a placeholder when empty
pub fn format_list(tokens: &[String]) -> String {
    if tokens.is_empty() {
        NO_TOKENS.to_string()
    } else {
        tokens.join("\n")
    }
}

impl PipelineReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Comparison table with aligned columns (header row always present)
    pub fn to_table(&self) -> String {
        const HEADERS: [&str; 3] = ["Original word", "Stemmed", "Lemmatized"];

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.comparison {
            let cells = [&row.surface_form, &row.stem, &row.lemma];
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let line = |cells: [&str; 3], out: &mut String| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{cell:<w$}", w = *width))
                .collect();
            out.push_str(padded.join(" | ").trim_end());
            out.push('\n');
        };

        line(HEADERS, &mut out);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');
        for row in &self.comparison {
            line([row.surface_form.as_str(), row.stem.as_str(), row.lemma.as_str()], &mut out);
        }
        out
    }

    /// Every stage as a titled section, followed by the comparison table
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        // writeln! into a String cannot fail
        let _ = writeln!(out, "== Original Text ==\n{}\n", self.original);
        let _ = writeln!(out, "== {} ==\n{}\n", Stage::Normalize.title(), self.cleaned());

        let tokens = self.tokens_at(Stage::Tokenize);
        let _ = writeln!(
            out,
            "== {} ==\nNumber of tokens: {}\nUnique tokens: {}\n{}\n",
            Stage::Tokenize.title(),
            self.stats.token_count,
            self.stats.unique_tokens,
            format_list(tokens)
        );

        let filtered = self.tokens_at(Stage::StopwordFilter);
        let _ = writeln!(
            out,
            "== {} ==\nAfter removing stopwords: {}\nWords removed: {}\n{}\n",
            Stage::StopwordFilter.title(),
            self.stats.filtered_count,
            self.stats.removed_count,
            format_list(filtered)
        );

        for stage in [Stage::Stem, Stage::Lemmatize] {
            let _ = writeln!(
                out,
                "== {} ==\n{}\n",
                stage.title(),
                format_list(self.tokens_at(stage))
            );
        }

        let _ = writeln!(out, "== Compare each token ==\n{}", self.to_table());
        out
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Table => Ok(self.to_table()),
            ReportFormat::Text => Ok(self.to_text()),
        }
    }

    pub fn save_with_format(&self, path: &str, format: ReportFormat) -> Result<()> {
        let rendered = self.render(format)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PipelineReport {
        let filtered = vec!["cats".to_string(), "running".to_string()];
        PipelineReport {
            schema_version: SCHEMA_VERSION.to_string(),
            language: Language::English,
            original: "Cats are running".to_string(),
            snapshots: vec![
                PipelineSnapshot::text(Stage::Normalize, "cats are running".to_string()),
                PipelineSnapshot::tokens(
                    Stage::Tokenize,
                    vec!["cats".to_string(), "are".to_string(), "running".to_string()],
                ),
                PipelineSnapshot::tokens(Stage::StopwordFilter, filtered),
                PipelineSnapshot::tokens(Stage::Stem, vec!["cat".to_string(), "run".to_string()]),
                PipelineSnapshot::tokens(
                    Stage::Lemmatize,
                    vec!["cat".to_string(), "run".to_string()],
                ),
            ],
            comparison: vec![
                ComparisonRow {
                    surface_form: "cats".to_string(),
                    stem: "cat".to_string(),
                    lemma: "cat".to_string(),
                },
                ComparisonRow {
                    surface_form: "running".to_string(),
                    stem: "run".to_string(),
                    lemma: "run".to_string(),
                },
            ],
            stats: PipelineStats {
                token_count: 3,
                unique_tokens: 3,
                filtered_count: 2,
                removed_count: 1,
            },
        }
    }

    #[test]
    fn test_table_layout() {
        let table = sample_report().to_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Original word | Stemmed | Lemmatized");
        assert_eq!(lines[1], "--------------+---------+-----------");
        assert_eq!(lines[2], "cats          | cat     | cat");
        assert_eq!(lines[3], "running       | run     | run");
    }

    #[test]
    fn test_text_sections() {
        let text = sample_report().to_text();
        assert!(text.contains("== Cleaned Text ==\ncats are running"));
        assert!(text.contains("Number of tokens: 3"));
        assert!(text.contains("Words removed: 1"));
        assert!(text.contains("== Lemmatized Tokens ==\ncat\nrun"));
    }

    #[test]
    fn test_json_carries_schema_version() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["schema_version"], SCHEMA_VERSION);
        assert_eq!(value["snapshots"][0]["content"]["kind"], "text");
        assert_eq!(value["comparison"][1]["lemma"], "run");
    }

    #[test]
    fn test_format_list_placeholder() {
        assert_eq!(format_list(&[]), "(no tokens)");
        assert_eq!(format_list(&["a".to_string(), "b".to_string()]), "a\nb");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(ReportFormat::parse("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("table"), Some(ReportFormat::Table));
        assert_eq!(ReportFormat::parse("graph"), None);
    }
}
