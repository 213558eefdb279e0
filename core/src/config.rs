//! Declaring a command from a YAML document.
//!
//! # Example YAML
//!
//! ```yaml
//! name: test-cli
//! description: A test CLI program.
//! options:
//!   - name: option1
//!     type: string
//!     default: default string
//!     description: This is the first option
//!     bind: option1
//!   - name: option3
//!     type: int
//!     default: 23
//!   - name: help
//!     type: bool
//!     default: false
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::{Command, OptionSpec};
use crate::error::{Error, Result};
use crate::validate::validate_command;

/// Serializable form of a [`Command`].
///
/// # Examples
///
/// ```
/// use argtree_core::CommandConfig;
///
/// let config = CommandConfig::from_yaml_str(
///     "name: demo\noptions:\n  - name: count\n    type: int\n    default: 3\n",
/// )
/// .unwrap();
/// let cmd = config.into_command().unwrap();
/// assert_eq!(cmd.usage(), "usage: demo [--count <int>] [param ...]\n");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Program name shown in usage text.
    pub name: String,
    /// Paragraph shown after the usage line.
    #[serde(default)]
    pub description: String,
    /// Declared options; a later entry replaces an earlier one of the same name.
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

impl CommandConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::Error::Io) if the file cannot be read, or
    /// [`Yaml`](crate::Error::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Builds the command and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`](crate::Error::InvalidConfig) with every
    /// validation problem found.
    pub fn into_command(self) -> Result<Command> {
        let mut command = Command::new(&self.name, &self.description);
        for option in self.options {
            command.declare(option);
        }

        let errors = validate_command(&command);
        if !errors.is_empty() {
            return Err(Error::InvalidConfig(errors));
        }
        Ok(command)
    }
}

impl From<&Command> for CommandConfig {
    fn from(command: &Command) -> Self {
        Self {
            name: command.name.clone(),
            description: command.description.clone(),
            options: command.options().cloned().collect(),
        }
    }
}
