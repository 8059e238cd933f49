pub mod output;

use crate::{detect, to_array, Case, Config, Outcome, Record};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Convert(Case),
    Detect,
    Split,
}

/// Collect inputs from the command line, or from `reader` line by line when
/// none were given.
pub fn collect_inputs(args: Vec<String>, reader: impl BufRead, config: &Config) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        let line = if config.trim_input {
            line.trim().to_string()
        } else {
            line
        };
        if config.skip_empty && line.trim().is_empty() {
            continue;
        }
        inputs.push(line);
    }
    log::info!("read {} inputs from stdin", inputs.len());
    Ok(inputs)
}

/// Run `action` over every input. Output order follows input order.
pub fn run(action: Action, inputs: &[String], source: Option<Case>) -> Vec<Record> {
    inputs
        .par_iter()
        .map(|input| Record {
            input: input.clone(),
            outcome: match action {
                Action::Convert(target) => Outcome::Converted(crate::convert(input, target, source)),
                Action::Detect => Outcome::Detected(detect(input)),
                Action::Split => Outcome::Split(to_array(input, source)),
            },
        })
        .collect()
}
