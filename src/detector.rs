use crate::case::Case;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

lazy_static! {
    // Ordered by priority: the first pattern to match the whole string wins.
    static ref PATTERNS: Vec<(Case, Regex)> = vec![
        (Case::Camel, Regex::new(r"^[a-z]+[A-Z][a-zA-Z0-9]*$").unwrap()),
        (Case::Pascal, Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap()),
        (Case::Snake, Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").unwrap()),
        (Case::Kebab, Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap()),
        (Case::Constant, Regex::new(r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$").unwrap()),
        (Case::Dot, Regex::new(r"^[a-z][a-z0-9]*(\.[a-z0-9]+)*$").unwrap()),
        (Case::Title, Regex::new(r"^[A-Z][a-z]*( [A-Z][a-z]*)*$").unwrap()),
        (Case::No, Regex::new(r"^[a-z][a-z0-9]*( [a-z0-9]+)*$").unwrap()),
        (Case::Sentence, Regex::new(r"^[A-Z][a-z0-9]*( [a-z0-9]+)*$").unwrap()),
        (Case::Path, Regex::new(r"^[a-z][a-z0-9]*(/[a-z0-9]+)*$").unwrap()),
    ];
}

/// Detect which case `input` is written in, or `None` if no pattern matches.
pub fn detect(input: impl Display) -> Option<Case> {
    let text = input.to_string();
    let detected = PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&text))
        .map(|(case, _)| *case);
    log::trace!("detected {:?} for {:?}", detected, text);
    detected
}

/// Every case whose pattern accepts `input`, in priority order.
pub fn detect_all(input: impl Display) -> Vec<Case> {
    let text = input.to_string();
    PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&text))
        .map(|(case, _)| *case)
        .collect()
}

impl Case {
    /// Whether `text` is well-formed in this case, ignoring priority.
    pub fn matches(&self, text: &str) -> bool {
        PATTERNS
            .iter()
            .find(|(case, _)| case == self)
            .is_some_and(|(_, pattern)| pattern.is_match(text))
    }
}
