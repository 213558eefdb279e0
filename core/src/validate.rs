//! Registry validation.
//!
//! Declaring options never fails, so mistakes such as a name written with
//! its `--` prefix or a default of the wrong type only surface at parse
//! time. [`validate_command`] reports them up front.
//!
//! # Examples
//!
//! ```
//! use argtree_core::*;
//!
//! let mut cmd = Command::new("demo", "");
//! cmd.bool_option(None, "verbose", false, "");
//! assert!(validate_command(&cmd).is_empty());
//!
//! // Invalid: the scanner adds `--` itself
//! cmd.bool_option(None, "--quiet", false, "");
//! assert_eq!(
//!     validate_command(&cmd),
//!     vec![ValidationError::InvalidOptionName("--quiet".into())]
//! );
//! ```

use thiserror::Error;

use crate::command::{Command, OptionSpec};
use crate::value::ValueType;

/// Registry validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Option name is empty.
    #[error("option name cannot be empty")]
    EmptyOptionName,
    /// Option name starts with a dash and can never be matched.
    #[error("invalid option name: {0}")]
    InvalidOptionName(String),
    /// Default value does not have the declared type.
    #[error("default for {name} is not of type {expected}")]
    DefaultTypeMismatch {
        /// Option name.
        name: String,
        /// Declared type.
        expected: ValueType,
    },
    /// Destination field identifier is empty.
    #[error("empty destination field for {0}")]
    EmptyBinding(String),
}

/// Validates every option of a command.
///
/// Returns all problems found, in option name order.
pub fn validate_command(command: &Command) -> Vec<ValidationError> {
    command.options().flat_map(validate_option).collect()
}

fn validate_option(opt: &OptionSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if opt.name.is_empty() {
        errors.push(ValidationError::EmptyOptionName);
    } else if opt.name.starts_with('-') {
        errors.push(ValidationError::InvalidOptionName(opt.name.clone()));
    }

    if !opt.value_type.accepts(&opt.default) {
        errors.push(ValidationError::DefaultTypeMismatch {
            name: opt.name.clone(),
            expected: opt.value_type,
        });
    }

    if opt.bind.as_deref().is_some_and(|field| field.trim().is_empty()) {
        errors.push(ValidationError::EmptyBinding(opt.name.clone()));
    }

    errors
}
