use crate::{Case, Outcome, Record};
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
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

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsonRecord {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// `null` when detection found nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<Option<Case>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

impl From<&Record> for JsonRecord {
    fn from(record: &Record) -> Self {
        let mut json = JsonRecord {
            input: record.input.clone(),
            output: None,
            case: None,
            words: None,
        };
        match &record.outcome {
            Outcome::Converted(output) => json.output = Some(output.clone()),
            Outcome::Detected(case) => json.case = Some(*case),
            Outcome::Split(words) => json.words = Some(words.clone()),
        }
        json
    }
}

pub fn render_records(records: &[Record], format: OutputFormat, colored_output: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| render_text(record, colored_output))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let json: Vec<JsonRecord> = records.iter().map(JsonRecord::from).collect();
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

pub fn print_records(records: &[Record], format: OutputFormat, colored_output: bool) -> Result<()> {
    if records.is_empty() && format == OutputFormat::Text {
        return Ok(());
    }
    println!("{}", render_records(records, format, colored_output)?);
    Ok(())
}

fn render_text(record: &Record, colored_output: bool) -> String {
    match &record.outcome {
        // Bare output so conversions can be piped
        Outcome::Converted(output) => output.clone(),
        Outcome::Detected(case) => {
            let label = case.map_or_else(|| "unknown".to_string(), |c| c.to_string());
            if colored_output {
                let label = match case {
                    Some(_) => label.green().bold(),
                    None => label.red().bold(),
                };
                format!("{} {}", label, record.input.dimmed())
            } else {
                format!("{} {}", label, record.input)
            }
        }
        Outcome::Split(words) => {
            if colored_output {
                words
                    .iter()
                    .map(|w| w.cyan().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                words.join(" ")
            }
        }
    }
}

pub fn print_cases(colored_output: bool) {
    for case in Case::ALL {
        if colored_output {
            println!("  {:<10} {}", case.to_string().cyan().bold(), case.example());
        } else {
            println!("  {:<10} {}", case, case.example());
        }
    }
}

pub fn print_unknown_summary(unknown: usize, total: usize, colored_output: bool) {
    if unknown == 0 {
        return;
    }
    let noun = if total == 1 { "input" } else { "inputs" };
    if colored_output {
        eprintln!(
            "{} {} of {} {} in no known case",
            "✗".red().bold(),
            unknown.to_string().red().bold(),
            total,
            noun
        );
    } else {
        eprintln!("✗ {} of {} {} in no known case", unknown, total, noun);
    }
}
