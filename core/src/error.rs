//! Error types for argument scanning, lookups and registry loading.
//!
//! Every failure the parser can hit is a variant of [`Error`]. The library
//! never terminates the process itself; a top-level caller that wants the
//! classic behavior calls [`Error::exit`].

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur while scanning arguments or reading results.
#[derive(Debug, Error)]
pub enum Error {
    /// A `--name` token that is not declared in the registry.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// A flag that expects a value was followed by another flag or by the
    /// end of input.
    #[error("Missing value for {0}")]
    MissingValue(String),

    /// The value of an integer option is not a base-10 integer.
    #[error("Bad int: {0}")]
    BadInt(String),

    /// A dotted path tries to use a scalar as a nested object.
    #[error("structure incongruence for {0}")]
    StructureIncongruence(String),

    /// A typed accessor found a value of a different type.
    #[error("Not {expected}: {found}")]
    TypeMismatch {
        /// Article and type name, e.g. `"an int"`.
        expected: &'static str,
        /// Display form of the stored value; objects render as JSON.
        found: String,
    },

    /// File I/O failure while loading a registry.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failure while loading a registry.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A loaded registry failed validation.
    #[error("invalid config: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Prints `*** <message>` on stdout and exits the process with status 1.
    pub fn exit(&self) -> ! {
        println!("*** {self}");
        std::process::exit(1)
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
