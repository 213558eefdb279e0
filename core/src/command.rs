//! Option declarations for declarative parsing.
//!
//! A [`Command`] owns a registry of [`OptionSpec`]s keyed by name. Names are
//! declared without the leading `--`; the scanner adds it at lookup time.
//! Declaring a name twice replaces the earlier declaration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueType};

/// A single declared option.
///
/// Use [`string`](OptionSpec::string), [`int`](OptionSpec::int) or
/// [`bool`](OptionSpec::bool) to create one, then chain
/// [`with_description`](OptionSpec::with_description) and
/// [`bound_to`](OptionSpec::bound_to).
///
/// # Examples
///
/// ```
/// use argtree_core::{OptionSpec, Value, ValueType};
///
/// let port = OptionSpec::int("port", 8080)
///     .with_description("Port to listen on")
///     .bound_to("port");
/// assert_eq!(port.value_type, ValueType::Int);
/// assert_eq!(port.default, Value::Int(8080));
/// assert_eq!(port.bind.as_deref(), Some("port"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Option name, without the `--` prefix.
    pub name: String,
    /// Declared type of the option's value.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Value used when the flag is absent.
    pub default: Value,
    /// Help text.
    #[serde(default)]
    pub description: String,
    /// Destination field that receives the resolved value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
}

impl OptionSpec {
    /// Creates a string option.
    pub fn string(name: &str, default: &str) -> Self {
        Self::new(name, ValueType::String, Value::from(default))
    }

    /// Creates an integer option.
    pub fn int(name: &str, default: i64) -> Self {
        Self::new(name, ValueType::Int, Value::Int(default))
    }

    /// Creates a boolean option.
    pub fn bool(name: &str, default: bool) -> Self {
        Self::new(name, ValueType::Bool, Value::Bool(default))
    }

    fn new(name: &str, value_type: ValueType, default: Value) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            default,
            description: String::new(),
            bind: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Binds the option to a destination field.
    pub fn bound_to(mut self, field: &str) -> Self {
        self.bind = Some(field.to_string());
        self
    }

    /// Returns the flag as typed on the command line, e.g. `--port`.
    pub fn flag(&self) -> String {
        format!("--{}", self.name)
    }
}

/// A program and its declared options.
///
/// # Examples
///
/// ```
/// use argtree_core::{Accessor, Command};
///
/// let mut cmd = Command::new("test-cli", "A test program.");
/// cmd.string_option(Some("option1"), "option1", "x", "The first option");
/// cmd.int_option(None, "option3", 23, "An int option");
///
/// let matches = cmd.parse(["--option3", "42", "pos1"]).unwrap();
/// assert_eq!(matches.params(), ["pos1"]);
/// assert_eq!(matches.get_string("option1", "").unwrap(), "x");
/// assert_eq!(matches.get_int("option3", 0).unwrap(), 42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Command {
    /// Program name shown in usage text.
    pub name: String,
    /// Free-form paragraph shown after the usage line.
    pub description: String,
    options: BTreeMap<String, OptionSpec>,
}

impl Command {
    /// Creates an empty registry.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: BTreeMap::new(),
        }
    }

    /// Registers an option, replacing any earlier one with the same name.
    pub fn declare(&mut self, option: OptionSpec) -> &mut Self {
        self.options.insert(option.name.clone(), option);
        self
    }

    /// Declares a string option, optionally bound to a destination field.
    pub fn string_option(
        &mut self,
        bind: Option<&str>,
        name: &str,
        default: &str,
        description: &str,
    ) -> &mut Self {
        self.declare(with_binding(
            OptionSpec::string(name, default).with_description(description),
            bind,
        ))
    }

    /// Declares an integer option, optionally bound to a destination field.
    pub fn int_option(
        &mut self,
        bind: Option<&str>,
        name: &str,
        default: i64,
        description: &str,
    ) -> &mut Self {
        self.declare(with_binding(
            OptionSpec::int(name, default).with_description(description),
            bind,
        ))
    }

    /// Declares a boolean option, optionally bound to a destination field.
    pub fn bool_option(
        &mut self,
        bind: Option<&str>,
        name: &str,
        default: bool,
        description: &str,
    ) -> &mut Self {
        self.declare(with_binding(
            OptionSpec::bool(name, default).with_description(description),
            bind,
        ))
    }

    /// Finds an option by name (without `--`).
    pub fn find(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    /// Iterates over options sorted by name.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no option is declared.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Renders the one-line usage synopsis.
    ///
    /// ```
    /// use argtree_core::Command;
    ///
    /// let mut cmd = Command::new("demo", "");
    /// cmd.bool_option(None, "verbose", false, "");
    /// cmd.int_option(None, "count", 1, "");
    /// assert_eq!(cmd.usage(), "usage: demo [--count <int>] [--verbose <bool>] [param ...]\n");
    /// ```
    pub fn usage(&self) -> String {
        let mut s = format!("usage: {}", self.name);
        for opt in self.options() {
            s.push_str(&format!(" [{} <{}>]", opt.flag(), opt.value_type));
        }
        s.push_str(" [param ...]\n");
        if !self.description.is_empty() {
            s.push('\n');
            s.push_str(&self.description);
        }
        s
    }

    /// Renders the usage synopsis followed by one line per option.
    pub fn help(&self) -> String {
        let mut s = self.usage();
        if self.options.is_empty() {
            return s;
        }
        if !s.ends_with('\n') {
            s.push('\n');
        }
        s.push_str("\noptions:\n");

        let rows: Vec<(String, &OptionSpec)> = self
            .options()
            .map(|opt| (format!("{} <{}>", opt.flag(), opt.value_type), opt))
            .collect();
        let width = rows.iter().map(|(head, _)| head.len()).max().unwrap_or(0);
        for (head, opt) in rows {
            let mut line = format!("  {head:<width$}");
            if !opt.description.is_empty() {
                line.push_str("  ");
                line.push_str(&opt.description);
            }
            line.push_str(&format!(" (default: {})", opt.default));
            s.push_str(line.trim_end());
            s.push('\n');
        }
        s
    }
}

fn with_binding(option: OptionSpec, bind: Option<&str>) -> OptionSpec {
    match bind {
        Some(field) => option.bound_to(field),
        None => option,
    }
}
