//! Result of schema-less parsing.

use serde::Serialize;

use crate::access::Accessor;
use crate::error::Result;
use crate::scan;
use crate::tree;
use crate::value::{Object, Value};

/// Positional parameters plus a nested object built from dotted flags.
///
/// No options are declared up front: `--entity.name Joe` stores `"Joe"`
/// under `entity` → `name`, and each value is coerced with
/// [`Value::coerce`].
///
/// # Examples
///
/// ```
/// use argtree_core::{Accessor, Context};
///
/// let ctx = Context::parse(["--entity.age", "23", "--entity.name", "Joe", "extra"]).unwrap();
/// assert_eq!(ctx.params(), ["extra"]);
/// assert_eq!(ctx.get_int("entity.age", 0).unwrap(), 23);
/// assert_eq!(ctx.get_string("entity.name", "").unwrap(), "Joe");
/// assert_eq!(ctx.get_object("entity").unwrap().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Context {
    params: Vec<String>,
    options: Object,
}

impl Context {
    pub(crate) fn new(params: Vec<String>, options: Object) -> Self {
        Self { params, options }
    }

    /// Parses `args` (without the program name).
    ///
    /// # Errors
    ///
    /// [`MissingValue`](crate::Error::MissingValue) when a flag is followed
    /// by another flag or ends the input, and
    /// [`StructureIncongruence`](crate::Error::StructureIncongruence) when a
    /// path reuses a scalar as an object.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scan::scan_nested(args)
    }

    /// Parses the current process arguments, skipping the program name.
    pub fn parse_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    /// Positional parameters in input order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The option tree.
    pub fn options(&self) -> &Object {
        &self.options
    }

    /// Stores `value` at a dotted `path`, as a flag would.
    pub fn insert(&mut self, path: &str, value: Value) -> Result<()> {
        tree::insert(&mut self.options, &tree::split_path(path), value)
    }
}

impl Accessor for Context {
    fn get(&self, path: &str) -> Result<Option<&Value>> {
        tree::lookup(&self.options, &tree::split_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_typed_getters_fall_back_to_default() {
        let ctx = Context::parse(["--entity.age", "23"]).unwrap();
        assert_eq!(ctx.get_int("entity.height", 180).unwrap(), 180);
        assert_eq!(ctx.get_string("name", "anonymous").unwrap(), "anonymous");
        assert!(!ctx.get_bool("missing.deeply.nested", false).unwrap());
        assert!(ctx.get_object("other").unwrap().is_none());
    }

    #[test]
    fn test_typed_getters_reject_other_types() {
        let ctx = Context::parse(["--entity.age", "23", "--entity.name", "Joe"]).unwrap();

        let err = ctx.get_int("entity.name", 0).unwrap_err();
        assert_eq!(err.to_string(), "Not an int: Joe");

        let err = ctx.get_string("entity.age", "").unwrap_err();
        assert_eq!(err.to_string(), "Not a string: 23");

        let err = ctx.get_object("entity.age").unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "an object", .. }));

        let err = ctx.get_bool("entity", false).unwrap_err();
        assert_eq!(err.to_string(), r#"Not a bool: {"age":23,"name":"Joe"}"#);
    }

    #[test]
    fn test_get_through_scalar_is_incongruent() {
        let ctx = Context::parse(["--foo", "bar"]).unwrap();
        let err = ctx.get("foo.baz").unwrap_err();
        assert_eq!(err.to_string(), "structure incongruence for foo.baz");
    }

    #[test]
    fn test_params_are_not_part_of_the_tree() {
        let ctx = Context::parse(["p1", "--params", "x", "p2"]).unwrap();
        assert_eq!(ctx.params(), ["p1", "p2"]);
        assert_eq!(ctx.get_string("params", "").unwrap(), "x");
    }

    #[test]
    fn test_insert_matches_flag() {
        let mut ctx = Context::default();
        ctx.insert("a.b", Value::Int(1)).unwrap();
        assert_eq!(ctx, Context::parse(["--a.b", "1"]).unwrap());
    }

    #[test]
    fn test_serializes_params_and_options() {
        let ctx = Context::parse(["--entity.age", "23", "extra"]).unwrap();
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, r#"{"params":["extra"],"options":{"entity":{"age":23}}}"#);
    }
}
