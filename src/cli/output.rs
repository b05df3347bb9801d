use crate::{CheckResult, CheckedToken};
use anyhow::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum IssueKind {
    Spelling,
    Spacing,
}

#[derive(Debug, Serialize)]
struct JsonIssue<'a> {
    line: usize,
    column: usize,
    text: &'a str,
    kind: IssueKind,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    suggestions: &'a [String],
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    misspelled: usize,
    spacing: usize,
    issues: Vec<JsonIssue<'a>>,
}

pub fn print_report(
    source: &str,
    result: &CheckResult,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_text_report(source, result, colored_output)),
        OutputFormat::Json => println!("{}", format_json_report(source, result)?),
    }
    Ok(())
}

pub fn format_text_report(source: &str, result: &CheckResult, colored_output: bool) -> String {
    let mut out = String::new();
    if result.error_count() == 0 {
        return out;
    }

    if colored_output {
        out.push_str(&format!("\n{}\n", source.bold().underline()));
    } else {
        out.push_str(&format!("\n{}\n", source));
    }

    for token in result.errors() {
        let line_info = format!("{}:{}", token.line, token.column);
        let (label, detail) = if token.is_misspelling() {
            ("spelling", "unknown word")
        } else {
            ("spacing", "missing space")
        };

        if colored_output {
            let text = if token.is_misspelling() {
                token.text.red().bold()
            } else {
                token.text.yellow().bold()
            };
            out.push_str(&format!(
                "  {} {} {} {}\n",
                line_info.blue().bold(),
                label.dimmed(),
                text,
                detail.dimmed()
            ));
        } else {
            out.push_str(&format!("  {} {} {} {}\n", line_info, label, token.text, detail));
        }

        if !token.result.suggestions.is_empty() {
            if colored_output {
                let suggestions = token
                    .result
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                out.push_str(&format!("    {} {}\n", "→".dimmed(), suggestions));
            } else {
                out.push_str(&format!("    → {}\n", token.result.suggestions.join(", ")));
            }
        }
    }

    out
}

pub fn format_json_report(source: &str, result: &CheckResult) -> Result<String> {
    let issues = result
        .errors()
        .map(|token| JsonIssue {
            line: token.line,
            column: token.column,
            text: &token.text,
            kind: if token.is_misspelling() {
                IssueKind::Spelling
            } else {
                IssueKind::Spacing
            },
            suggestions: &token.result.suggestions,
        })
        .collect();

    let output = JsonOutput {
        source,
        misspelled: result.misspelled_count,
        spacing: result.spacing_count,
        issues,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

/// Render the checked text with problem tokens highlighted.
pub fn highlight(result: &CheckResult) -> String {
    result
        .tokens
        .iter()
        .map(|token| {
            if token.is_misspelling() {
                token.text.red().underline().to_string()
            } else if token.is_spacing_error() {
                token.text.on_yellow().to_string()
            } else {
                token.text.clone()
            }
        })
        .collect()
}

pub fn print_check_summary(misspelled: usize, spacing: usize, sources: usize, colored: bool) {
    let total_errors = misspelled + spacing;
    let source_word = if sources == 1 { "input" } else { "inputs" };

    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No problems found!".green().bold());
        } else {
            println!("✓ No problems found!");
        }
    } else {
        let error_word = if total_errors == 1 { "problem" } else { "problems" };
        let breakdown = format!("{} spelling, {} spacing", misspelled, spacing);
        if colored {
            println!(
                "{} {} {} found in {} {} ({})",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                sources,
                source_word,
                breakdown.dimmed()
            );
        } else {
            println!(
                "✗ {} {} found in {} {} ({})",
                total_errors, error_word, sources, source_word, breakdown
            );
        }
    }
}

pub fn print_fix_summary(total_fixed: usize, sources: usize, colored: bool) {
    let source_word = if sources == 1 { "input" } else { "inputs" };

    eprintln!();
    if total_fixed == 0 {
        if colored {
            eprintln!("{}", "No corrections needed!".green().bold());
        } else {
            eprintln!("No corrections needed!");
        }
    } else {
        let fix_word = if total_fixed == 1 { "correction" } else { "corrections" };
        if colored {
            eprintln!(
                "{} {} {} applied to {} {}",
                "✓".green().bold(),
                total_fixed.to_string().green().bold(),
                fix_word,
                sources,
                source_word
            );
        } else {
            eprintln!(
                "✓ {} {} applied to {} {}",
                total_fixed, fix_word, sources, source_word
            );
        }
    }
}

/// Ask which suggestion should replace a misspelled word. `None` keeps the word.
pub fn prompt_replacement(token: &CheckedToken, source: &str) -> Result<Option<String>> {
    if token.result.suggestions.is_empty() {
        return Ok(None);
    }

    let mut items: Vec<&str> = token.result.suggestions.iter().map(String::as_str).collect();
    items.push("(keep as written)");

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}:{}:{} unknown word '{}'",
            source, token.line, token.column, token.text
        ))
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.and_then(|idx| token.result.suggestions.get(idx).cloned()))
}
