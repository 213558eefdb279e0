//! Typed lookups shared by [`Matches`](crate::Matches) and
//! [`Context`](crate::Context).
//!
//! Implementors provide [`Accessor::get`]; the typed getters fall back to a
//! default when the value is absent and fail with
//! [`Error::TypeMismatch`] when it has another type. Values are never
//! converted between types on the way out.

use crate::error::{Error, Result};
use crate::value::{Object, Value};

/// Read access to parsed option values.
///
/// # Examples
///
/// ```
/// use argtree_core::{Accessor, Context};
///
/// let ctx = Context::parse(["--server.port", "8080"]).unwrap();
/// assert_eq!(ctx.get_int("server.port", 80).unwrap(), 8080);
/// assert_eq!(ctx.get_string("server.host", "localhost").unwrap(), "localhost");
/// assert!(ctx.get_bool("server.port", false).is_err());
/// ```
pub trait Accessor {
    /// Returns the value stored under `path`, or `None` if it is absent.
    fn get(&self, path: &str) -> Result<Option<&Value>>;

    /// Returns the integer at `path`, or `default` when absent.
    fn get_int(&self, path: &str, default: i64) -> Result<i64> {
        match self.get(path)? {
            None => Ok(default),
            Some(Value::Int(n)) => Ok(*n),
            Some(other) => Err(mismatch("an int", other)),
        }
    }

    /// Returns the string at `path`, or `default` when absent.
    fn get_string(&self, path: &str, default: &str) -> Result<String> {
        match self.get(path)? {
            None => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(mismatch("a string", other)),
        }
    }

    /// Returns the boolean at `path`, or `default` when absent.
    fn get_bool(&self, path: &str, default: bool) -> Result<bool> {
        match self.get(path)? {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch("a bool", other)),
        }
    }

    /// Returns the nested object at `path`, if any.
    fn get_object(&self, path: &str) -> Result<Option<&Object>> {
        match self.get(path)? {
            None => Ok(None),
            Some(Value::Object(o)) => Ok(Some(o)),
            Some(other) => Err(mismatch("an object", other)),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.to_string(),
    }
}
