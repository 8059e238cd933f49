use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A naming convention a string can be written in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
    /// `HELLO_WORLD`
    Constant,
    /// `Hello World`
    Title,
    /// `hello.world`
    Dot,
    /// `hello world`
    No,
    /// `Hello world`
    Sentence,
    /// `hello/world`
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case: {0:?}")]
pub struct ParseCaseError(pub String);

impl Case {
    /// Every case, in detection priority order.
    pub const ALL: [Case; 10] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Kebab,
        Case::Constant,
        Case::Dot,
        Case::Title,
        Case::No,
        Case::Sentence,
        Case::Path,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Constant => "constant",
            Case::Title => "title",
            Case::Dot => "dot",
            Case::No => "no",
            Case::Sentence => "sentence",
            Case::Path => "path",
        }
    }

    /// Sample rendering of `hello world` in this case.
    pub fn example(&self) -> &'static str {
        match self {
            Case::Camel => "helloWorld",
            Case::Pascal => "HelloWorld",
            Case::Snake => "hello_world",
            Case::Kebab => "hello-world",
            Case::Constant => "HELLO_WORLD",
            Case::Title => "Hello World",
            Case::Dot => "hello.world",
            Case::No => "hello world",
            Case::Sentence => "Hello world",
            Case::Path => "hello/world",
        }
    }

    /// Lenient parse for source-case hints.
    ///
    /// Anything that does not name a case yields `None`, which callers treat
    /// exactly like an absent hint.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.parse() {
            Ok(case) => Some(case),
            Err(e) => {
                if !hint.is_empty() {
                    log::debug!("ignoring source case hint: {}", e);
                }
                None
            }
        }
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Case::ALL
            .iter()
            .copied()
            .find(|case| case.name() == lowered)
            .ok_or_else(|| ParseCaseError(s.to_string()))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
