use crate::case::Case;
use crate::detector::detect;
use std::fmt::Display;

type Splitter = fn(&str) -> Vec<String>;

/// Split `input` into lowercase words.
///
/// With a `source` case the matching rule is applied directly and detection is
/// skipped. Otherwise the case is detected first; strings no pattern accepts
/// go through [`split_generic`].
pub fn to_array(input: impl Display, source: Option<Case>) -> Vec<String> {
    let text = input.to_string();
    let case = source.or_else(|| detect(&text));
    log::trace!("splitting {:?} as {:?}", text, case);
    splitter(case)(&text)
}

fn splitter(case: Option<Case>) -> Splitter {
    match case {
        Some(Case::Camel | Case::Pascal) => split_camel,
        Some(Case::Snake | Case::Constant) => |text| split_on(text, '_'),
        Some(Case::Kebab) => |text| split_on(text, '-'),
        Some(Case::Dot) => |text| split_on(text, '.'),
        Some(Case::Title | Case::Sentence | Case::No) => |text| split_on(text, ' '),
        Some(Case::Path) => |text| split_on(text, '/'),
        None => split_generic,
    }
}

fn split_on(text: &str, separator: char) -> Vec<String> {
    text.to_lowercase()
        .split(separator)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

fn split_camel(text: &str) -> Vec<String> {
    mark_boundaries(text)
        .to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Fallback for strings in no known case, including strings that mix
/// several conventions. Every separator and every case transition is a word
/// boundary; words come out in the order they appear.
pub fn split_generic(text: &str) -> Vec<String> {
    mark_boundaries(text)
        .replace(['-', '_', '.'], " ")
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Insert a space before each uppercase letter that does not follow another
/// uppercase letter, and before each digit that does not follow another digit.
fn mark_boundaries(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 2);
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        let after_upper = prev.is_some_and(|p| p.is_ascii_uppercase());
        let after_digit = prev.is_some_and(|p| p.is_ascii_digit());

        if (ch.is_ascii_uppercase() && !after_upper) || (ch.is_ascii_digit() && !after_digit) {
            result.push(' ');
        }
        result.push(ch);
        prev = Some(ch);
    }

    result
}
