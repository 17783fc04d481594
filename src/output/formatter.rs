//! Output formatters: console, JSON, Markdown and HTML renderings of a match

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::TermSet;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;

    fn format_structured(&self, report: &StructuredResumeReport) -> Result<String>;

    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Self-contained HTML page, also served by `POST /upload`
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Picks the formatter for a requested `OutputFormat`
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 6px 14px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-strong, .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-weak { background: #dc3545; }
        .scores {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
        }
        .score-item, .terms, .structured {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
            margin: 10px 0;
        }
        .matched { border-left-color: #28a745; }
        .missing { border-left-color: #ffc107; }
        .tag {
            display: inline-block;
            background: #e9ecef;
            border-radius: 4px;
            padding: 2px 8px;
            margin: 2px;
        }
        h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 8px; }
        pre { white-space: pre-wrap; }
        .metadata { font-size: 0.9em; color: #6c757d; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Match Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <h2>Scores</h2>
        <div class="scores">
            <div class="score-item">
                <h3>ATS Score: {{ ats_score }}%<span class="score-badge {{ ats_class }}">{{ ats_label }}</span></h3>
                <p>{{ matched_count }} of {{ jd_skill_count }} job description skills found</p>
            </div>
            <div class="score-item">
                <h3>Similarity: {{ similarity_score }}%<span class="score-badge {{ similarity_class }}">{{ similarity_label }}</span></h3>
                <p>TF-IDF cosine similarity of the full texts</p>
            </div>
        </div>

        <h2>Skills</h2>
        <div class="terms matched">
            <h3>Matched</h3>
            {% if matched_skills.is_empty() %}<p>None</p>{% endif %}
            {% for skill in matched_skills %}<span class="tag">{{ skill }}</span>{% endfor %}
        </div>
        <div class="terms missing">
            <h3>Missing</h3>
            {% if missing_skills.is_empty() %}<p>None</p>{% endif %}
            {% for skill in missing_skills %}<span class="tag">{{ skill }}</span>{% endfor %}
        </div>

        <h2>Keywords</h2>
        <div class="terms matched">
            <h3>Matched</h3>
            {% for keyword in matched_keywords %}<span class="tag">{{ keyword }}</span>{% endfor %}
        </div>
        <div class="terms missing">
            <h3>Missing</h3>
            {% for keyword in missing_keywords %}<span class="tag">{{ keyword }}</span>{% endfor %}
        </div>

        {% if !suggestions.is_empty() %}
        <h2>Suggestions</h2>
        <ul>
            {% for suggestion in suggestions %}<li>{{ suggestion }}</li>
            {% endfor %}
        </ul>
        {% endif %}

        {% if has_structured %}
        <h2>Structured Resume</h2>
        <p>Similarity before: {{ before_score }}% | after: {{ after_score }}%</p>
        <div class="structured">
            <pre>{{ structured_text }}</pre>
        </div>
        {% endif %}

        <div class="metadata">
            <p>resume-matcher v{{ version }} | {{ strategy }} matching over {{ vocabulary_size }} skills</p>
            {% if !resume_source.is_empty() %}<p>Resume: {{ resume_source }} | Job: {{ jd_source }}</p>{% endif %}
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlReportPage {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    ats_score: String,
    ats_class: &'static str,
    ats_label: &'static str,
    matched_count: usize,
    jd_skill_count: usize,
    similarity_score: u8,
    similarity_class: &'static str,
    similarity_label: &'static str,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    matched_keywords: Vec<String>,
    missing_keywords: Vec<String>,
    suggestions: Vec<String>,
    has_structured: bool,
    before_score: u8,
    after_score: u8,
    structured_text: String,
    version: String,
    strategy: String,
    vocabulary_size: usize,
    resume_source: String,
    jd_source: String,
}

fn format_timestamp(report: &MatchReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn join_terms(terms: &TermSet) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn strategy_name(report: &MatchReport) -> String {
    format!("{:?}", report.metadata.strategy).to_lowercase()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            75..=100 => Color::Green,
            60..=74 => Color::Yellow,
            40..=59 => Color::BrightYellow,
            _ => Color::Red,
        };
        let label = score_label(score).to_uppercase();

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_terms(&self, label: &str, terms: &TermSet, color: Color) -> String {
        if terms.is_empty() {
            format!("{}: {}\n", label, self.colorize("none", Color::BrightBlack))
        } else {
            format!("{} ({}): {}\n", label, terms.len(), self.colorize(&join_terms(terms), color))
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&format!(
            "ATS Score:  {}% {}\n",
            report.ats_score,
            self.format_score_badge(report.score_percentage())
        ));
        output.push_str(&format!(
            "Similarity: {}% {}\n",
            report.similarity_score,
            self.format_score_badge(report.similarity_score)
        ));

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&self.format_terms("Matched", &report.matched_skills, Color::Green));
        output.push_str(&self.format_terms("Missing", &report.missing_skills, Color::Yellow));

        output.push_str(&self.format_header("Keywords", 2));
        output.push_str(&self.format_terms("Matched", &report.matched_keywords, Color::Green));
        output.push_str(&self.format_terms("Missing", &report.missing_keywords, Color::Yellow));

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 2));
            for suggestion in &report.suggestions {
                output.push_str(&format!("  • {}\n", suggestion));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Details", 3));
            output.push_str(&self.format_terms("Resume skills", &report.resume_skills, Color::Cyan));
            output.push_str(&self.format_terms("Job skills", &report.jd_skills, Color::Cyan));
            output.push_str(&format!(
                "Text length: resume {} chars, job {} chars\n",
                report.metadata.resume_characters, report.metadata.jd_characters
            ));
            if let (Some(resume), Some(jd)) = (&report.metadata.resume_source, &report.metadata.jd_source) {
                output.push_str(&format!("Sources: {} | {}\n", resume, jd));
            }
        }

        output.push_str(&format!(
            "\n{} resume-matcher v{} | {} matching over {} skills\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.version,
            strategy_name(report),
            report.metadata.vocabulary_size
        ));

        Ok(output)
    }

    fn format_structured(&self, report: &StructuredResumeReport) -> Result<String> {
        let mut output = self.format_report(&report.analysis)?;

        output.push_str(&self.format_header("Structured Resume", 2));
        output.push_str(&format!(
            "Similarity: {}% -> {}% ({:+})\n\n",
            report.scores.before,
            report.scores.after,
            report.scores.improvement()
        ));
        output.push_str(&report.structured_resume.text);

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
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn format_structured(&self, report: &StructuredResumeReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_terms(terms: &TermSet) -> String {
        if terms.is_empty() {
            "_none_".to_string()
        } else {
            format!("`{}`", terms.iter().map(String::as_str).collect::<Vec<_>>().join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::from("# Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            if let (Some(resume), Some(jd)) = (&report.metadata.resume_source, &report.metadata.jd_source) {
                output.push_str(&format!("**Resume:** `{}` | **Job:** `{}`\n\n", resume, jd));
            }
        }

        output.push_str("## Scores\n\n");
        output.push_str("| Metric | Score | Rating |\n");
        output.push_str("|--------|-------|--------|\n");
        output.push_str(&format!(
            "| ATS skill coverage | {}% | {} |\n",
            report.ats_score,
            score_label(report.score_percentage())
        ));
        output.push_str(&format!(
            "| Text similarity | {}% | {} |\n\n",
            report.similarity_score,
            score_label(report.similarity_score)
        ));

        output.push_str("## Skills\n\n");
        output.push_str(&format!("- **Matched:** {}\n", Self::markdown_terms(&report.matched_skills)));
        output.push_str(&format!("- **Missing:** {}\n\n", Self::markdown_terms(&report.missing_skills)));

        output.push_str("## Keywords\n\n");
        output.push_str(&format!("- **Matched:** {}\n", Self::markdown_terms(&report.matched_keywords)));
        output.push_str(&format!("- **Missing:** {}\n\n", Self::markdown_terms(&report.missing_keywords)));

        if !report.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for suggestion in &report.suggestions {
                output.push_str(&format!("- {}\n", suggestion));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by resume-matcher v{} ({} matching, {} skills)*\n",
                report.metadata.version,
                strategy_name(report),
                report.metadata.vocabulary_size
            ));
        }

        Ok(output)
    }

    fn format_structured(&self, report: &StructuredResumeReport) -> Result<String> {
        let mut output = self.format_report(&report.analysis)?;

        output.push_str("\n## Structured Resume\n\n");
        output.push_str(&format!(
            "Similarity before: **{}%** | after: **{}%**\n\n",
            report.scores.before, report.scores.after
        ));
        output.push_str(&format!("```\n{}```\n", report.structured_resume.text));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn score_class(score: u8) -> &'static str {
        match score_label(score) {
            "Excellent" => "score-excellent",
            "Strong" => "score-strong",
            "Good" => "score-good",
            "Fair" => "score-fair",
            _ => "score-weak",
        }
    }

    fn create_page(&self, report: &MatchReport) -> HtmlReportPage {
        let ats = report.score_percentage();

        HtmlReportPage {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            ats_score: report.ats_score.to_string(),
            ats_class: Self::score_class(ats),
            ats_label: score_label(ats),
            matched_count: report.matched_skills.len(),
            jd_skill_count: report.jd_skills.len(),
            similarity_score: report.similarity_score,
            similarity_class: Self::score_class(report.similarity_score),
            similarity_label: score_label(report.similarity_score),
            matched_skills: report.matched_skills.iter().cloned().collect(),
            missing_skills: report.missing_skills.iter().cloned().collect(),
            matched_keywords: report.matched_keywords.iter().cloned().collect(),
            missing_keywords: report.missing_keywords.iter().cloned().collect(),
            suggestions: report.suggestions.clone(),
            has_structured: false,
            before_score: 0,
            after_score: 0,
            structured_text: String::new(),
            version: report.metadata.version.clone(),
            strategy: strategy_name(report),
            vocabulary_size: report.metadata.vocabulary_size,
            resume_source: report.metadata.resume_source.clone().unwrap_or_default(),
            jd_source: report.metadata.jd_source.clone().unwrap_or_default(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        Ok(self.create_page(report).render()?)
    }

    fn format_structured(&self, report: &StructuredResumeReport) -> Result<String> {
        let mut page = self.create_page(&report.analysis);
        page.has_structured = true;
        page.before_score = report.scores.before;
        page.after_score = report.scores.after;
        page.structured_text = report.structured_resume.text.clone();

        Ok(page.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_structured(&self, report: &StructuredResumeReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_structured(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_match{}.{}", base_name, timestamp_suffix, extension)
}
