//! Single-pass token scanners for declared and schema-less parsing.
//!
//! Both scanners walk the arguments left to right and remember at most one
//! flag awaiting its value. Tokens starting with `--` are flags; everything
//! else is either the pending flag's value or a positional parameter.

use tracing::debug;

use crate::command::{Command, OptionSpec};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::matches::Matches;
use crate::tree;
use crate::value::{Object, Value, ValueType, parse_bool_literal};

const FLAG_PREFIX: &str = "--";

/// Scans `args` against the options declared in `command`.
///
/// The result starts from every option's default and is overwritten by each
/// flag encountered.
pub(crate) fn scan_declared<I, S>(command: &Command, args: I) -> Result<Matches>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = DeclaredScanner::new(command);
    for arg in args {
        scanner.feed(arg.as_ref())?;
    }
    scanner.finish()
}

/// Scans `args` into a nested object keyed by dotted flag paths.
pub(crate) fn scan_nested<I, S>(args: I) -> Result<Context>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = NestedScanner::default();
    for arg in args {
        scanner.feed(arg.as_ref())?;
    }
    scanner.finish()
}

struct DeclaredScanner<'a> {
    command: &'a Command,
    pending: Option<&'a OptionSpec>,
    params: Vec<String>,
    options: Object,
}

impl<'a> DeclaredScanner<'a> {
    fn new(command: &'a Command) -> Self {
        let options = command
            .options()
            .map(|opt| (opt.name.clone(), opt.default.clone()))
            .collect();
        Self {
            command,
            pending: None,
            params: Vec::new(),
            options,
        }
    }

    fn feed(&mut self, token: &str) -> Result<()> {
        if let Some(name) = token.strip_prefix(FLAG_PREFIX) {
            let Some(opt) = self.command.find(name) else {
                return Err(Error::UnknownOption(token.to_string()));
            };
            debug!(flag = token, value_type = %opt.value_type, "Matched option");
            // A value-taking flag cut short is reported under the flag that cut it.
            self.resolve_pending(token)?;
            self.pending = Some(opt);
            return Ok(());
        }

        let Some(opt) = self.pending.take() else {
            debug!(param = token, "Positional parameter");
            self.params.push(token.to_string());
            return Ok(());
        };

        let value = match opt.value_type {
            ValueType::String => Value::from(token),
            ValueType::Int => token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::BadInt(token.to_string()))?,
            ValueType::Bool => match parse_bool_literal(token) {
                Some(b) => Value::Bool(b),
                None => {
                    // Presence alone sets the flag; the token is someone else's.
                    debug!(flag = %opt.flag(), param = token, "Boolean flag without literal");
                    self.params.push(token.to_string());
                    Value::Bool(true)
                }
            },
        };
        self.options.insert(opt.name.clone(), value);
        Ok(())
    }

    /// Finalizes a flag that saw no value: booleans become `true`, anything
    /// else is a [`MissingValue`](Error::MissingValue) naming `culprit`.
    fn resolve_pending(&mut self, culprit: &str) -> Result<()> {
        let Some(opt) = self.pending.take() else {
            return Ok(());
        };
        match opt.value_type {
            ValueType::Bool => {
                self.options.insert(opt.name.clone(), Value::Bool(true));
                Ok(())
            }
            _ => Err(Error::MissingValue(culprit.to_string())),
        }
    }

    fn finish(mut self) -> Result<Matches> {
        if let Some(opt) = self.pending {
            self.resolve_pending(&opt.name)?;
        }
        Ok(Matches::new(self.params, self.options))
    }
}

#[derive(Default)]
struct NestedScanner {
    pending: Option<String>,
    params: Vec<String>,
    options: Object,
}

impl NestedScanner {
    fn feed(&mut self, token: &str) -> Result<()> {
        let flag = token.strip_prefix(FLAG_PREFIX);

        let Some(path) = self.pending.take() else {
            match flag {
                Some(path) => {
                    debug!(path, "Awaiting value");
                    self.pending = Some(path.to_string());
                }
                None => {
                    debug!(param = token, "Positional parameter");
                    self.params.push(token.to_string());
                }
            }
            return Ok(());
        };

        if flag.is_some() {
            return Err(Error::MissingValue(path));
        }
        tree::insert(
            &mut self.options,
            &tree::split_path(&path),
            Value::coerce(token),
        )
    }

    fn finish(self) -> Result<Context> {
        if let Some(path) = self.pending {
            return Err(Error::MissingValue(path));
        }
        Ok(Context::new(self.params, self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Accessor;

    fn command() -> Command {
        let mut cmd = Command::new("test-cli", "");
        cmd.string_option(None, "option1", "x", "")
            .string_option(None, "option2", "y", "")
            .int_option(None, "option3", 23, "")
            .bool_option(None, "option4", false, "");
        cmd
    }

    #[test]
    fn test_declared_defaults_and_overrides() {
        let m = scan_declared(&command(), ["--option3", "42", "pos1"]).unwrap();
        assert_eq!(m.params(), ["pos1"]);
        assert_eq!(m.get_string("option1", "").unwrap(), "x");
        assert_eq!(m.get_int("option3", 0).unwrap(), 42);
        assert!(!m.get_bool("option4", true).unwrap());
    }

    #[test]
    fn test_declared_bool_without_value() {
        let m = scan_declared(&command(), ["--option4"]).unwrap();
        assert!(m.get_bool("option4", false).unwrap());
        assert!(m.params().is_empty());
    }

    #[test]
    fn test_declared_bool_followed_by_flag() {
        let m = scan_declared(&command(), ["--option4", "--option1", "z"]).unwrap();
        assert!(m.get_bool("option4", false).unwrap());
        assert_eq!(m.get_string("option1", "").unwrap(), "z");
    }

    #[test]
    fn test_declared_bool_literals_ignore_case() {
        let m = scan_declared(&command(), ["--option4", "TRUE"]).unwrap();
        assert!(m.get_bool("option4", false).unwrap());
        assert!(m.params().is_empty());

        let cmd = {
            let mut c = command();
            c.bool_option(None, "option4", true, "");
            c
        };
        let m = scan_declared(&cmd, ["--option4", "False"]).unwrap();
        assert!(!m.get_bool("option4", true).unwrap());
    }

    #[test]
    fn test_declared_bool_passes_other_token_to_params() {
        let m = scan_declared(&command(), ["a", "--option4", "file.txt", "b"]).unwrap();
        assert!(m.get_bool("option4", false).unwrap());
        assert_eq!(m.params(), ["a", "file.txt", "b"]);
    }

    #[test]
    fn test_declared_string_takes_any_token() {
        let m = scan_declared(&command(), ["--option1", "42", "--option2", ""]).unwrap();
        assert_eq!(m.get_string("option1", "").unwrap(), "42");
        assert_eq!(m.get_string("option2", "?").unwrap(), "");
    }

    #[test]
    fn test_declared_keeps_empty_params() {
        let m = scan_declared(&command(), ["", "x"]).unwrap();
        assert_eq!(m.params(), ["", "x"]);
    }

    #[test]
    fn test_declared_negative_int() {
        let m = scan_declared(&command(), ["--option3", "-5"]).unwrap();
        assert_eq!(m.get_int("option3", 0).unwrap(), -5);
    }

    #[test]
    fn test_declared_unknown_option() {
        let err = scan_declared(&command(), ["--nope", "1"]).unwrap_err();
        assert!(matches!(err, Error::UnknownOption(ref f) if f == "--nope"));
    }

    #[test]
    fn test_declared_bad_int() {
        let err = scan_declared(&command(), ["--option3", "many"]).unwrap_err();
        assert!(matches!(err, Error::BadInt(ref t) if t == "many"));
    }

    #[test]
    fn test_declared_missing_value_between_flags() {
        let err = scan_declared(&command(), ["--option3", "--option4"]).unwrap_err();
        assert!(matches!(err, Error::MissingValue(ref f) if f == "--option4"));
        assert_eq!(err.to_string(), "Missing value for --option4");
    }

    #[test]
    fn test_declared_missing_value_at_end() {
        let err = scan_declared(&command(), ["--option1"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for option1");
    }

    #[test]
    fn test_declared_repeated_flag_last_wins() {
        let m = scan_declared(&command(), ["--option3", "1", "--option3", "2"]).unwrap();
        assert_eq!(m.get_int("option3", 0).unwrap(), 2);
    }

    #[test]
    fn test_nested_builds_tree() {
        let ctx = scan_nested([
            "--entity.age",
            "23",
            "--entity.name",
            "Joe",
            "extra",
        ])
        .unwrap();
        assert_eq!(ctx.params(), ["extra"]);
        assert_eq!(ctx.get_int("entity.age", 0).unwrap(), 23);
        assert_eq!(ctx.get_string("entity.name", "").unwrap(), "Joe");

        let entity = ctx.get_object("entity").unwrap().unwrap();
        assert_eq!(entity.len(), 2);
    }

    #[test]
    fn test_nested_coerces_values() {
        let ctx = scan_nested(["--blah", "true", "--glorp", "100", "--foo", "bar"]).unwrap();
        assert!(ctx.get_bool("blah", false).unwrap());
        assert_eq!(ctx.get_int("glorp", 0).unwrap(), 100);
        assert_eq!(ctx.get_string("foo", "").unwrap(), "bar");
    }

    #[test]
    fn test_nested_flag_after_flag_is_missing_value() {
        let err = scan_nested(["--a.b", "--c", "1"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for a.b");
    }

    #[test]
    fn test_nested_pending_at_end_is_missing_value() {
        let err = scan_nested(["x", "--verbose"]).unwrap_err();
        assert!(matches!(err, Error::MissingValue(ref p) if p == "verbose"));
    }

    #[test]
    fn test_nested_conflicting_paths() {
        let err = scan_nested(["--a", "1", "--a.b", "2"]).unwrap_err();
        assert!(matches!(err, Error::StructureIncongruence(_)));
    }

    #[test]
    fn test_nested_only_params() {
        let ctx = scan_nested(["one", "two"]).unwrap();
        assert_eq!(ctx.params(), ["one", "two"]);
        assert!(ctx.options().is_empty());
    }
}
