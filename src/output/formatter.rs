//! Result formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::AnalysisResult;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

/// Verdict bands for the match score, mirroring the presentation the score
/// scale was designed for: below 40 is a low match, below 70 moderate,
/// otherwise high.
fn verdict(score: f64) -> (&'static str, colored::Color) {
    if score < 40.0 {
        ("Low match - resume needs significant improvement", colored::Color::Red)
    } else if score < 70.0 {
        ("Moderate match - improve keywords and skills", colored::Color::Yellow)
    } else {
        ("High match - resume is ATS friendly", colored::Color::Green)
    }
}

pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
}

pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub include_suggestions: bool,
}

pub struct JsonFormatter {
    pub pretty: bool,
}

pub struct MarkdownFormatter;

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();
        let (verdict_text, verdict_color) = verdict(result.similarity_score);

        let score_line = format!("Match score: {:.2}%", result.similarity_score);
        if self.use_colors {
            writeln!(out, "{}", score_line.bold()).ok();
            writeln!(out, "{}", verdict_text.color(verdict_color)).ok();
        } else {
            writeln!(out, "{}", score_line).ok();
            writeln!(out, "{}", verdict_text).ok();
        }

        writeln!(out, "\nResume keywords:").ok();
        for entry in &result.resume_keywords {
            writeln!(out, "  {} ({})", entry.token, entry.count).ok();
        }

        writeln!(out, "\nJob keywords:").ok();
        for entry in &result.job_keywords {
            writeln!(out, "  {} ({})", entry.token, entry.count).ok();
        }

        writeln!(out, "\nMatched skills:").ok();
        if result.matched_skills.is_empty() {
            writeln!(out, "  No strong matches found").ok();
        } else {
            writeln!(out, "  {}", result.matched_skills.join(", ")).ok();
        }

        writeln!(out, "\nMissing skills:").ok();
        if result.missing_skills.is_empty() {
            writeln!(out, "  None").ok();
        } else {
            writeln!(out, "  {}", result.missing_skills.join(", ")).ok();
        }

        if self.include_suggestions {
            writeln!(out, "\nSuggestions:").ok();
            for suggestion in suggestions(result) {
                writeln!(out, "  - {}", suggestion).ok();
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();
        let (verdict_text, _) = verdict(result.similarity_score);

        writeln!(out, "# Resume Analysis\n").ok();
        writeln!(out, "**Match score:** {:.2}%", result.similarity_score).ok();
        writeln!(out, "**Verdict:** {}\n", verdict_text).ok();

        writeln!(out, "## Resume Keywords\n").ok();
        writeln!(out, "| Keyword | Count |").ok();
        writeln!(out, "|---------|-------|").ok();
        for entry in &result.resume_keywords {
            writeln!(out, "| {} | {} |", entry.token, entry.count).ok();
        }

        writeln!(out, "\n## Job Keywords\n").ok();
        writeln!(out, "| Keyword | Count |").ok();
        writeln!(out, "|---------|-------|").ok();
        for entry in &result.job_keywords {
            writeln!(out, "| {} | {} |", entry.token, entry.count).ok();
        }

        writeln!(out, "\n## Matched Skills\n").ok();
        if result.matched_skills.is_empty() {
            writeln!(out, "No strong matches found.").ok();
        } else {
            for skill in &result.matched_skills {
                writeln!(out, "- {}", skill).ok();
            }
        }

        writeln!(out, "\n## Missing Skills\n").ok();
        if result.missing_skills.is_empty() {
            writeln!(out, "None.").ok();
        } else {
            for skill in &result.missing_skills {
                writeln!(out, "- {}", skill).ok();
            }
        }

        writeln!(out, "\n## Suggestions\n").ok();
        for suggestion in suggestions(result) {
            writeln!(out, "- {}", suggestion).ok();
        }

        Ok(out)
    }
}

/// Improvement suggestions derived from the gap analysis, plus the general
/// ATS tips the analysis has always shipped with.
pub fn suggestions(result: &AnalysisResult) -> Vec<String> {
    let mut tips = Vec::new();

    if result.missing_skills.is_empty() {
        tips.push("Your resume already covers the required skills".to_string());
    } else {
        for skill in &result.missing_skills {
            tips.push(format!("Add '{}' to your resume naturally", skill));
        }
    }

    tips.push("Use action verbs (developed, implemented, optimized)".to_string());
    tips.push("Match job role keywords exactly".to_string());
    tips.push("Keep the resume ATS-friendly (no tables or images)".to_string());
    tips.push("Quantify achievements with numbers".to_string());

    tips
}

/// Format a result in the requested output format.
pub fn format_result(
    result: &AnalysisResult,
    format: OutputFormat,
    use_colors: bool,
    include_suggestions: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter {
            use_colors,
            include_suggestions,
        }
        .format_result(result),
        OutputFormat::Json => JsonFormatter { pretty: true }.format_result(result),
        OutputFormat::Markdown => MarkdownFormatter.format_result(result),
    }
}

/// Write formatted output to a file.
pub fn save_to_file(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
