use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordcase::cli::output::{render, OutputFormat};
use wordcase::{cli, Config, Conversion, WordOptions};

#[derive(Parser, Debug)]
#[command(name = "wordcase")]
#[command(version, about = "Split text into words and rejoin them in any case style", long_about = None)]
struct Cli {
    /// Text to convert (reads lines from stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Conversion to apply (words, acronym, dash, upper-camel, lower-camel, snake)
    #[arg(short = 't', long = "to", value_name = "CONVERSION")]
    conversion: Option<Conversion>,

    /// Treat hyphens as word separators
    #[arg(short = 'd', long)]
    distinguish_hyphens: bool,

    /// Remove hyphens from words
    #[arg(long)]
    strip_hyphens: bool,

    /// Remove apostrophes from words
    #[arg(long)]
    strip_apostrophes: bool,

    /// Uppercase common acronyms (api, url, id)
    #[arg(short = 'a', long)]
    uppercase_acronyms: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Additional config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

impl Cli {
    fn word_options(&self) -> WordOptions {
        [
            (self.distinguish_hyphens, WordOptions::DISTINGUISH_HYPHENATED_WORDS),
            (self.strip_hyphens, WordOptions::STRIP_HYPHENS),
            (self.strip_apostrophes, WordOptions::STRIP_APOSTROPHES),
            (
                self.uppercase_acronyms,
                WordOptions::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS,
            ),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, flag)| flag)
        .collect()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordcase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.conversion, cli.word_options(), cli.config.as_deref())?;

    let inputs = if cli.text.is_empty() {
        read_stdin_lines()?
    } else {
        cli.text.clone()
    };

    let results = cli::convert_all(&inputs, config.conversion, config.options);
    let rendered = render(&results, !cli.no_color, cli.format)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}
