use crate::case::Case;
use crate::tokenizer::to_array;
use std::fmt::Display;

/// Upper-case the first character of `input`, leaving the rest untouched.
///
/// An empty string comes back empty. A first character whose upper-case form
/// spans several characters (`ß` -> `SS`) expands to all of them.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Case {
    /// Format an already tokenized word sequence in this case.
    pub fn assemble<S: AsRef<str>>(&self, words: &[S]) -> String {
        let words = words.iter().map(AsRef::<str>::as_ref);
        match self {
            Case::Camel => words
                .enumerate()
                .map(|(i, word)| if i == 0 { word.to_string() } else { capitalize(word) })
                .collect(),
            Case::Pascal => words.map(capitalize).collect(),
            Case::Snake => join(words, "_"),
            Case::Kebab => join(words, "-"),
            Case::Constant => join(words, "_").to_uppercase(),
            Case::Title => join(words.map(capitalize), " "),
            Case::Dot => join(words, "."),
            Case::No => join(words, " "),
            Case::Sentence => join(
                words
                    .enumerate()
                    .map(|(i, word)| if i == 0 { capitalize(word) } else { word.to_string() }),
                " ",
            ),
            Case::Path => join(words, "/"),
        }
    }
}

fn join<I, S>(words: I, separator: &str) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, word) in words.enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(word.as_ref());
    }
    result
}

/// Convert `input` to the `to` case, optionally telling the tokenizer which
/// case the input is already in.
pub fn convert(input: impl Display, to: Case, from: Option<Case>) -> String {
    to.assemble(&to_array(input, from))
}

pub fn to_camel(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Camel, source)
}

pub fn to_pascal(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Pascal, source)
}

pub fn to_snake(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Snake, source)
}

pub fn to_kebab(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Kebab, source)
}

pub fn to_constant(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Constant, source)
}

pub fn to_title(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Title, source)
}

pub fn to_dot(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Dot, source)
}

pub fn to_no(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::No, source)
}

pub fn to_sentence(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Sentence, source)
}

pub fn to_path(input: impl Display, source: Option<Case>) -> String {
    convert(input, Case::Path, source)
}
