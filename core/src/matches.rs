//! Result of declarative parsing.

use serde::Serialize;
use tracing::warn;

use crate::access::Accessor;
use crate::bind::{Destination, Target};
use crate::command::Command;
use crate::error::Result;
use crate::scan;
use crate::value::{Object, Value};

/// Positional parameters plus a flat map of every declared option.
///
/// Options absent from the command line hold their declared default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Matches {
    params: Vec<String>,
    options: Object,
}

impl Matches {
    pub(crate) fn new(params: Vec<String>, options: Object) -> Self {
        Self { params, options }
    }

    /// Positional parameters in input order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Resolved option values keyed by option name.
    pub fn options(&self) -> &Object {
        &self.options
    }

    /// Writes each bound option's value into `dest`.
    ///
    /// A value whose type differs from the field's type writes the field's
    /// empty value (`""`, `0` or `false`) and logs a warning. Fields the
    /// destination does not know are skipped with a warning.
    pub fn apply<D: Destination + ?Sized>(&self, command: &Command, dest: &mut D) {
        for opt in command.options() {
            let Some(field) = opt.bind.as_deref() else {
                continue;
            };
            let Some(value) = self.options.get(&opt.name) else {
                continue;
            };
            let Some(target) = dest.target(field) else {
                warn!(option = %opt.flag(), field, "Destination has no such field");
                continue;
            };
            write_target(target, value, &opt.name);
        }
    }
}

fn write_target(target: Target<'_>, value: &Value, option: &str) {
    let degraded = |expected: &str| {
        warn!(option, expected, found = value.kind(), "Writing empty value to mismatched field");
    };
    match target {
        Target::String(slot) => {
            *slot = match value.as_str() {
                Some(s) => s.to_string(),
                None => {
                    degraded("a string");
                    String::new()
                }
            }
        }
        Target::Int(slot) => {
            *slot = match value.as_int() {
                Some(n) => n,
                None => {
                    degraded("an int");
                    0
                }
            }
        }
        Target::Bool(slot) => {
            *slot = match value.as_bool() {
                Some(b) => b,
                None => {
                    degraded("a bool");
                    false
                }
            }
        }
    }
}

impl Accessor for Matches {
    /// Looks the whole `path` up as an option name; dots are not split.
    fn get(&self, path: &str) -> Result<Option<&Value>> {
        Ok(self.options.get(path))
    }
}

impl Command {
    /// Parses `args` (without the program name) against the declared options.
    ///
    /// # Errors
    ///
    /// [`UnknownOption`](crate::Error::UnknownOption) for an undeclared flag,
    /// [`MissingValue`](crate::Error::MissingValue) when a non-boolean flag
    /// gets no value, [`BadInt`](crate::Error::BadInt) when an integer value
    /// does not parse.
    pub fn parse<I, S>(&self, args: I) -> Result<Matches>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scan::scan_declared(self, args)
    }

    /// Parses the current process arguments, skipping the program name.
    pub fn parse_env(&self) -> Result<Matches> {
        self.parse(std::env::args().skip(1))
    }
}
