//! Dotted-path insertion and lookup over nested [`Object`]s.
//!
//! `--entity.name Joe` is stored as `{"entity": {"name": "Joe"}}`. Missing
//! intermediate objects are created on demand; a scalar and an object can
//! never share a key.

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::{Object, Value};

/// Splits a dotted path into its segments.
///
/// Always returns at least one segment; `""` yields `[""]`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// Stores `value` at `path`, creating intermediate objects as needed.
///
/// The last segment is overwritten unconditionally. Descending through a key
/// that holds a scalar fails with [`Error::StructureIncongruence`].
///
/// # Examples
///
/// ```
/// use argtree_core::{Object, Value, tree};
///
/// let mut root = Object::new();
/// tree::insert(&mut root, &["entity", "age"], Value::Int(23)).unwrap();
/// assert_eq!(tree::lookup(&root, &["entity", "age"]).unwrap(), Some(&Value::Int(23)));
///
/// let err = tree::insert(&mut root, &["entity", "age", "years"], Value::Int(1));
/// assert!(err.is_err());
/// ```
pub fn insert<S: AsRef<str>>(root: &mut Object, path: &[S], value: Value) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut node = root;
    for (depth, segment) in parents.iter().enumerate() {
        let child = node
            .entry(segment.as_ref().to_string())
            .or_insert_with(|| Value::Object(Object::new()));
        node = match child {
            Value::Object(next) => next,
            _ => return Err(Error::StructureIncongruence(join(&path[..=depth + 1]))),
        };
    }

    debug!(path = %join(path), value = %value, "Inserting value");
    node.insert(last.as_ref().to_string(), value);
    Ok(())
}

/// Finds the value stored at `path`.
///
/// A missing key at any level yields `Ok(None)`. A scalar with segments
/// still remaining fails with [`Error::StructureIncongruence`].
pub fn lookup<'a, S: AsRef<str>>(root: &'a Object, path: &[S]) -> Result<Option<&'a Value>> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(None);
    };

    let mut node = root;
    for (depth, segment) in parents.iter().enumerate() {
        node = match node.get(segment.as_ref()) {
            None => return Ok(None),
            Some(Value::Object(next)) => next,
            Some(_) => return Err(Error::StructureIncongruence(join(&path[..=depth + 1]))),
        };
    }
    Ok(node.get(last.as_ref()))
}

/// Joins path segments back into dotted form.
pub(crate) fn join<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}
