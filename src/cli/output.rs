use crate::cli::ConversionResult;
use crate::Converted;
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;

/// How converted results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Converted value only, one line per input
    #[default]
    Text,
    /// Input and converted value separated by a tab
    Tsv,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    input: &'a str,
    conversion: String,
    output: &'a Converted,
}

/// Render results in the requested format, one trailing newline per line.
pub fn render(results: &[ConversionResult], colored_output: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results, colored_output)),
        OutputFormat::Tsv => Ok(render_tsv(results)),
        OutputFormat::Json => render_json(results),
    }
}

fn render_text(results: &[ConversionResult], colored_output: bool) -> String {
    let mut rendered = String::new();

    for result in results {
        let line = if colored_output {
            format_colored(&result.output)
        } else {
            result.output.to_string()
        };
        rendered.push_str(&line);
        rendered.push('\n');
    }

    rendered
}

/// Tabs and newlines inside inputs are replaced so every row stays two columns.
fn render_tsv(results: &[ConversionResult]) -> String {
    results
        .iter()
        .map(|r| {
            let input = r.input.replace(['\t', '\n', '\r'], " ");
            format!("{}\t{}\n", input, r.output)
        })
        .collect()
}

fn format_colored(output: &Converted) -> String {
    match output {
        // Alternate colors so adjacent words stay distinguishable
        Converted::Words(words) => words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i % 2 == 0 {
                    word.cyan().to_string()
                } else {
                    word.yellow().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        Converted::Text(text) => text.green().bold().to_string(),
    }
}

fn render_json(results: &[ConversionResult]) -> Result<String> {
    let json_results: Vec<JsonResult> = results
        .iter()
        .map(|r| JsonResult {
            input: &r.input,
            conversion: r.conversion.to_string(),
            output: &r.output,
        })
        .collect();

    let mut rendered =
        serde_json::to_string_pretty(&json_results).context("Failed to serialize results")?;
    rendered.push('\n');
    Ok(rendered)
}
