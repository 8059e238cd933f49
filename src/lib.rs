//! Detect and convert between naming-convention cases.
//!
//! Every conversion tokenizes its input into lowercase words first and then
//! assembles those words in the requested case:
//!
//! ```
//! use casekit::{detect, to_camel, to_array, Case};
//!
//! assert_eq!(to_camel("hello-world", None), "helloWorld");
//! assert_eq!(detect("HELLO_WORLD"), Some(Case::Constant));
//! assert_eq!(to_array("hello.WORLD_foo-bar", None), vec!["hello", "world", "foo", "bar"]);
//! ```
//!
//! Inputs are anything that implements [`std::fmt::Display`]; they are
//! stringified once with `to_string()` before any matching happens.

pub mod case;
pub mod cli;
pub mod config;
pub mod convert;
pub mod detector;
pub mod tokenizer;

pub use case::{Case, ParseCaseError};
pub use config::Config;
pub use convert::{
    capitalize, convert, to_camel, to_constant, to_dot, to_kebab, to_no, to_pascal, to_path,
    to_sentence, to_snake, to_title,
};
pub use detector::{detect, detect_all};
pub use tokenizer::to_array;

/// Outcome of running one input through the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(String),
    Detected(Option<Case>),
    Split(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub input: String,
    pub outcome: Outcome,
}
