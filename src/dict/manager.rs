use crate::checker::dictionary::{parse_wordlist, Dictionary};
use anyhow::{Context, Result};
use colored::*;
use fst::Streamer;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a loaded dictionary, as shown by `dict info`.
pub struct DictionaryInfo {
    pub source: String,
    pub format: &'static str,
    pub word_count: usize,
    pub longest_word: usize,
}

impl DictionaryInfo {
    pub fn collect(source: Option<&Path>) -> Result<Self> {
        let dict = match source {
            Some(path) => Dictionary::load_from_path(path)
                .with_context(|| format!("Failed to load dictionary: {}", path.display()))?,
            None => Dictionary::embedded().context("Failed to load embedded dictionary")?,
        };

        let format = match source {
            None => "embedded word list",
            Some(path) if path.extension().and_then(|e| e.to_str()) == Some("dict") => {
                "FST (Finite State Transducer)"
            }
            Some(_) => "word list",
        };

        let mut longest_word = 0;
        let mut stream = dict.stream();
        while let Some(key) = stream.next() {
            longest_word = longest_word.max(String::from_utf8_lossy(key).chars().count());
        }

        Ok(Self {
            source: source
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<embedded>".to_string()),
            format,
            word_count: dict.len(),
            longest_word,
        })
    }
}

/// Default output path for `dict build`: the input path with a `.dict` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("dict")
}

/// Compile a newline-delimited word list into an FST dictionary file.
pub fn build_dictionary(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    if output == input {
        anyhow::bail!(
            "Refusing to overwrite the word list {} with its compiled form",
            input.display()
        );
    }

    println!(
        "{} {}...",
        "Building dictionary from".cyan().bold(),
        input.display().to_string().yellow()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.set_message("Reading word list...");

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read word list: {}", input.display()))?;
    let words = parse_wordlist(&content);

    pb.set_message(format!("Compiling {} entries...", words.len()));
    let count = Dictionary::build_from_words(&words, &output)
        .with_context(|| format!("Failed to build dictionary: {}", output.display()))?;
    pb.finish_with_message("Build complete");

    info!("Wrote {} words to {}", count, output.display());
    println!("Found {} words", count.to_string().yellow());
    println!(
        "{} Dictionary written: {}",
        "✓".green().bold(),
        output.display().to_string().cyan()
    );

    Ok(output)
}

pub fn show_info(source: Option<&Path>) -> Result<()> {
    let info = DictionaryInfo::collect(source)?;

    println!("{}", format!("Dictionary: {}", info.source).bold());
    println!("  Format: {}", info.format);
    println!("  Words: {}", info.word_count.to_string().yellow());
    println!("  Longest word: {} characters", info.longest_word);

    Ok(())
}
