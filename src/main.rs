use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wordcheck::cli::output::{self, OutputFormat};
use wordcheck::config::Overrides;
use wordcheck::{dict, CheckResult, Config, Validator};

#[derive(Parser, Debug)]
#[command(name = "wordcheck")]
#[command(version, about = "Spelling and punctuation-spacing checker", long_about = None)]
struct Cli {
    /// Files or directories to check (reads stdin when none are given)
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Check this text instead of files
    #[arg(short, long, conflicts_with = "paths")]
    text: Option<String>,

    /// Replace misspellings with their first suggestion
    #[arg(short, long)]
    fix: bool,

    /// Choose each replacement interactively
    #[arg(short, long, requires = "fix")]
    interactive: bool,

    /// Print the checked text with problems highlighted
    #[arg(long)]
    show: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if problems are found
    #[arg(long)]
    no_fail: bool,

    /// Word list or compiled .dict file to check against
    #[arg(short, long, env = "WORDCHECK_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Maximum number of suggestions per misspelled word
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// Compile a word list into a .dict file
    Build {
        /// Newline-delimited word list
        wordlist: PathBuf,

        /// Output path (defaults to the word list with a .dict extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show dictionary info
    Info {
        /// Word list or .dict file (defaults to the embedded word list)
        path: Option<PathBuf>,
    },
}

/// A piece of text to check and where it came from.
struct Input {
    label: String,
    path: Option<PathBuf>,
    content: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordcheck", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = Config::load(Overrides {
        wordlist: cli.wordlist.clone(),
        max_suggestions: cli.max_suggestions,
        no_color: cli.no_color,
    })?;
    if !config.color {
        colored::control::set_override(false);
    }

    let validator = Validator::from_config(&config)?;
    let inputs = collect_inputs(&cli)?;
    debug!("Checking {} inputs", inputs.len());

    if cli.fix {
        let mut total_fixed = 0;
        for input in &inputs {
            total_fixed += fix_input(&validator, input, cli.interactive)?;
        }
        output::print_fix_summary(total_fixed, inputs.len(), config.color);
        return Ok(());
    }

    let results: Vec<CheckResult> = inputs
        .par_iter()
        .map(|input| validator.check_text(&input.content))
        .collect();

    let mut misspelled = 0;
    let mut spacing = 0;
    for (input, result) in inputs.iter().zip(&results) {
        if cli.show {
            // keep stdout a clean JSON stream
            match cli.format {
                OutputFormat::Text => println!("{}", output::highlight(result)),
                OutputFormat::Json => eprintln!("{}", output::highlight(result)),
            }
        }
        output::print_report(&input.label, result, config.color, cli.format)?;
        misspelled += result.misspelled_count;
        spacing += result.spacing_count;
    }

    if cli.format == OutputFormat::Text {
        output::print_check_summary(misspelled, spacing, inputs.len(), config.color);
    }

    // Exit with appropriate code
    if misspelled + spacing > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn collect_inputs(cli: &Cli) -> Result<Vec<Input>> {
    if let Some(text) = &cli.text {
        return Ok(vec![Input {
            label: "<text>".to_string(),
            path: None,
            content: text.clone(),
        }]);
    }

    if cli.paths.is_empty() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(vec![Input {
            label: "<stdin>".to_string(),
            path: None,
            content,
        }]);
    }

    let mut inputs = Vec::new();
    for path in &cli.paths {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            if entry.file_type().is_file() {
                if let Some(input) = read_input(entry.path())? {
                    inputs.push(input);
                }
            }
        }
    }

    Ok(inputs)
}

fn read_input(path: &Path) -> Result<Option<Input>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(Input {
            label: path.display().to_string(),
            path: Some(path.to_path_buf()),
            content,
        })),
        Err(_) => {
            warn!("Skipping non-UTF-8 file {}", path.display());
            Ok(None)
        }
    }
}

fn fix_input(validator: &Validator, input: &Input, interactive: bool) -> Result<usize> {
    let (fixed_text, fixed) = if interactive {
        let mut prompt_error = None;
        let outcome = validator.fix_with(&input.content, |token| {
            if prompt_error.is_some() {
                return None;
            }
            output::prompt_replacement(token, &input.label).unwrap_or_else(|e| {
                prompt_error = Some(e);
                None
            })
        });
        if let Some(e) = prompt_error {
            return Err(e);
        }
        outcome
    } else {
        validator.fix_text(&input.content)
    };

    match &input.path {
        Some(path) if fixed > 0 => {
            fs::write(path, &fixed_text)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        Some(_) => {}
        None => print!("{}", fixed_text),
    }

    Ok(fixed)
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::Build { wordlist, output } => {
                dict::manager::build_dictionary(&wordlist, output.as_deref())?;
            }
            DictCommands::Info { path } => {
                dict::manager::show_info(path.as_deref())?;
            }
        },
    }
    Ok(())
}
