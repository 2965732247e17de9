//! Output formatters for recommendation reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{CareerMatcherError, Result};
use crate::matching::Recommendation;
use crate::output::report::{RecommendationReport, VocabularyReport};
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::Path;

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn format_vocabulary(&self, vocabulary: &VocabularyReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output for scripting and UI integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown output for sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_tag_line(&self, label: &str, tags: &[String]) -> String {
        let value = if tags.is_empty() {
            self.colorize("None", Color::BrightBlack)
        } else {
            self.colorize(&tags.join(", "), Color::Green)
        };
        format!("   {}: {}\n", label, value)
    }

    fn format_recommendation(&self, index: usize, rec: &Recommendation) -> String {
        let mut output = String::new();
        let title = format!("{}. {}", index, rec.career);
        output.push_str(&format!(
            "{} {} {}\n",
            if self.use_colors { title.bold().to_string() } else { title },
            self.colorize(&format!("(Score: {})", format_score(rec.score)), Color::Cyan),
            self.colorize(&format!("[{}]", rec.field), Color::BrightBlack)
        ));
        if !rec.description.is_empty() {
            output.push_str(&format!("   {}\n", rec.description));
        }
        if !rec.courses.is_empty() {
            output.push_str(&format!("   Courses: {}\n", rec.courses.join(", ")));
        }
        output.push_str(&self.format_tag_line("Matched Skills", &rec.skills));
        output.push_str(&self.format_tag_line("Matched Interests", &rec.interests));
        output.push_str(&self.format_tag_line("Matched Traits", &rec.traits));
        output.push('\n');
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 CAREER RECOMMENDATIONS", 1));
        output.push_str(&format!(
            "Generated: {} | Catalog: {} careers | Minimum score: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.catalog_size,
            format_score(report.min_score)
        ));

        if !report.inferred.is_empty() {
            output.push_str(&self.format_header("Understood from your description", 3));
            let join = |set: &BTreeSet<String>| set.iter().cloned().collect::<Vec<_>>();
            output.push_str(&self.format_tag_line("Skills", &join(&report.inferred.skills)));
            output.push_str(&self.format_tag_line("Interests", &join(&report.inferred.interests)));
            output.push_str(&self.format_tag_line("Traits", &join(&report.inferred.traits)));
        }

        if report.is_empty() {
            let hint = "No recommendations yet. Try adding more skills or lowering the minimum score.";
            output.push_str(&format!("\n{}\n", self.colorize(hint, Color::Yellow)));
            return Ok(output);
        }

        output.push_str(&self.format_header("Recommendations for you", 2));
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&self.format_recommendation(i + 1, rec));
        }

        Ok(output)
    }

    fn format_vocabulary(&self, vocabulary: &VocabularyReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.format_header("📚 Available options", 1));
        for (label, items) in [
            ("Skills", &vocabulary.skills),
            ("Interests", &vocabulary.interests),
            ("Traits", &vocabulary.traits),
            ("Fields", &vocabulary.fields),
        ] {
            output.push_str(&self.format_header(&format!("{} ({})", label, items.len()), 3));
            for item in items {
                output.push_str(&format!("  • {}\n", item));
            }
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_vocabulary(&self, vocabulary: &VocabularyReport) -> Result<String> {
        self.to_json(vocabulary)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn tag_list(tags: &[String]) -> String {
        if tags.is_empty() {
            "None".to_string()
        } else {
            tags.join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 🎯 Career Recommendations\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Catalog:** {} careers | **Minimum score:** {}\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.catalog_size,
                format_score(report.min_score)
            ));
        }

        if report.is_empty() {
            output.push_str("_No recommendations matched._\n");
            return Ok(output);
        }

        output.push_str("| # | Career | Field | Score |\n");
        output.push_str("|---|--------|-------|-------|\n");
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                rec.career,
                rec.field,
                format_score(rec.score)
            ));
        }
        output.push('\n');

        for rec in &report.recommendations {
            output.push_str(&format!("## {} (Score: {})\n\n", rec.career, format_score(rec.score)));
            if !rec.description.is_empty() {
                output.push_str(&format!("{}\n\n", rec.description));
            }
            for (label, tags) in [
                ("Courses", &rec.courses),
                ("Matched Skills", &rec.skills),
                ("Matched Interests", &rec.interests),
                ("Matched Traits", &rec.traits),
            ] {
                output.push_str(&format!("- **{}:** {}\n", label, Self::tag_list(tags)));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn format_vocabulary(&self, vocabulary: &VocabularyReport) -> Result<String> {
        let mut output = String::from("# 📚 Available Options\n\n");
        for (label, items) in [
            ("Skills", &vocabulary.skills),
            ("Interests", &vocabulary.interests),
            ("Traits", &vocabulary.traits),
            ("Fields", &vocabulary.fields),
        ] {
            output.push_str(&format!("## {}\n\n", label));
            for item in items {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output),
            json_formatter: JsonFormatter::new(config.pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> Result<&dyn OutputFormatter> {
        let formatters: [&dyn OutputFormatter; 3] = [
            &self.console_formatter,
            &self.json_formatter,
            &self.markdown_formatter,
        ];

        formatters
            .into_iter()
            .find(|formatter| formatter.supports_format() == format)
            .ok_or_else(|| {
                let message = format!("No formatter for {:?} output", format);
                CareerMatcherError::OutputFormatting(message)
            })
    }

    pub fn generate_report(
        &self,
        report: &RecommendationReport,
        format: OutputFormat,
    ) -> Result<String> {
        self.formatter(format)?.format_report(report)
    }

    pub fn generate_vocabulary(
        &self,
        vocabulary: &VocabularyReport,
        format: OutputFormat,
    ) -> Result<String> {
        self.formatter(format)?.format_vocabulary(vocabulary)
    }
}

/// Score with trailing zeros trimmed, so it reads back as the weighted sum
/// (3 for 3.0, 3.75 for 3.75).
pub fn format_score(score: f64) -> String {
    let fixed = format!("{:.4}", score);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content).map_err(|e| {
        let message = format!("Failed to write '{}': {}", file_path.display(), e);
        CareerMatcherError::OutputFormatting(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchBreakdown;
    use crate::processing::normalizer::InferredTags;

    fn sample_report() -> RecommendationReport {
        RecommendationReport::new(
            3,
            2.0,
            InferredTags {
                skills: ["Math".to_string()].into(),
                ..InferredTags::default()
            },
            vec![Recommendation {
                career: "Data Scientist".to_string(),
                score: 3.0,
                description: "Finds patterns in data".to_string(),
                courses: vec!["Statistics".to_string()],
                skills: vec!["Math".to_string()],
                interests: Vec::new(),
                traits: vec!["Curious".to_string()],
                field: "Tech".to_string(),
                breakdown: MatchBreakdown {
                    skill_matches: 1,
                    interest_matches: 0,
                    trait_matches: 1,
                },
            }],
        )
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false).format_report(&sample_report()).unwrap();

        assert!(output.contains("1. Data Scientist (Score: 3) [Tech]"));
        assert!(output.contains("Courses: Statistics"));
        assert!(output.contains("Matched Interests: None"));
        assert!(output.contains("Matched Traits: Curious"));
    }

    #[test]
    fn test_console_empty_report() {
        let report = RecommendationReport::new(3, 2.0, InferredTags::default(), Vec::new());
        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("No recommendations yet"));
    }

    #[test]
    fn test_json_uses_career_key() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["recommendations"][0]["career"], "Data Scientist");
        assert_eq!(value["recommendations"][0]["score"], 3.0);
        assert_eq!(value["inferred"]["skills"][0], "Math");
    }

    #[test]
    fn test_markdown_table() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.contains("| 1 | Data Scientist | Tech | 3 |"));
        assert!(output.contains("- **Matched Interests:** None"));
        assert!(!output.contains("**Generated:**"));
    }

    #[test]
    fn test_vocabulary_formats() {
        let vocabulary = VocabularyReport {
            skills: vec!["Math".to_string(), "Python".to_string()],
            interests: vec!["AI".to_string()],
            traits: Vec::new(),
            fields: vec!["Tech".to_string()],
        };
        let generator = ReportGenerator::from_config(&OutputConfig {
            color_output: false,
            ..OutputConfig::default()
        });

        let console = generator.generate_vocabulary(&vocabulary, OutputFormat::Console).unwrap();
        assert!(console.contains("Skills (2)"));
        assert!(console.contains("  • Python"));

        let markdown = generator.generate_vocabulary(&vocabulary, OutputFormat::Markdown).unwrap();
        assert!(markdown.contains("## Fields\n\n- Tech"));
    }

    #[test]
    fn test_generator_routes_by_format() {
        let generator = ReportGenerator::from_config(&OutputConfig {
            color_output: false,
            pretty_json: false,
            ..OutputConfig::default()
        });
        let report = sample_report();

        let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
        assert!(json.starts_with("{\"generated_at\""));
        assert!(!json.contains('\n'));

        let markdown = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# 🎯 Career Recommendations"));

        let console = generator.generate_report(&report, OutputFormat::Console).unwrap();
        assert!(console.contains("1. Data Scientist (Score: 3) [Tech]"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(3.0), "3");
        assert_eq!(format_score(10.0), "10");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(2.5), "2.5");
        assert_eq!(format_score(3.75), "3.75");
        assert_eq!(format_score(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_save_report_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
