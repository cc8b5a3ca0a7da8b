//! Dotted path utilities for `serde_json` values.
//!
//! A dotted path addresses a value nested inside JSON objects: `"a.b.c"`
//! names the value under key `c` of the object under key `b` of the object
//! under key `a`. The empty string addresses the root. Only objects are
//! traversed; arrays and scalars end the walk.
//!
//! # Example
//!
//! ```
//! use cson_path::{parse_path, format_path, get, set};
//! use serde_json::json;
//!
//! let path = parse_path("a.b");
//! assert_eq!(path, vec!["a".to_string(), "b".to_string()]);
//! assert_eq!(format_path(&path), "a.b");
//!
//! let mut doc = json!(null);
//! set(&mut doc, &path, json!(1));
//! assert_eq!(doc, json!({"a": {"b": 1}}));
//! assert_eq!(get(&doc, &path), Some(&json!(1)));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::trace;

/// A step in a dotted path: one object key.
pub type PathStep = String;

/// A parsed dotted path.
pub type Path = Vec<PathStep>;

/// Separator between path steps.
pub const SEPARATOR: char = '.';

/// Parse a dotted path into its steps.
///
/// - Empty string returns empty vec (the root)
/// - Steps are not unescaped; a key containing `.` cannot be addressed
/// - Leading, trailing or doubled dots produce empty-string steps
///
/// # Example
///
/// ```
/// use cson_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("a"), vec!["a"]);
/// assert_eq!(parse_path("a.b"), vec!["a", "b"]);
/// assert_eq!(parse_path("a..b"), vec!["a", "", "b"]);
/// ```
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Format path steps back into a dotted path.
///
/// Returns an empty string for the root path.
pub fn format_path(path: &[String]) -> String {
    path.join(".")
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Join a base path with a relative one.
///
/// # Example
///
/// ```
/// use cson_path::{join, parse_path};
///
/// let base = parse_path("a.b");
/// assert_eq!(join(&base, "c.d"), parse_path("a.b.c.d"));
/// assert_eq!(join(&base, ""), base);
/// ```
pub fn join(base: &[String], relative: &str) -> Path {
    let mut out = base.to_vec();
    out.extend(parse_path(relative));
    out
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if any step is missing or walks through a non-object.
///
/// # Example
///
/// ```
/// use cson_path::{get, parse_path};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}, "list": [1, 2]});
/// assert_eq!(get(&doc, &parse_path("foo.bar")), Some(&json!(42)));
/// assert_eq!(get(&doc, &parse_path("foo.missing")), None);
/// // Arrays are not addressable.
/// assert_eq!(get(&doc, &parse_path("list.0")), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Object(map) => current = map.get(step)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value by path.
///
/// Walks the same way as [`get`]; nothing is created on the way.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        match current {
            Value::Object(map) => current = map.get_mut(step)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Find a value in a JSON document by path, reporting why a walk failed.
///
/// # Errors
///
/// - `PathError::NotFound` - an object lacks the step's key
/// - `PathError::NotObject` - the step would descend into a non-object
pub fn find<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, PathError> {
    let mut current = val;
    for (depth, step) in path.iter().enumerate() {
        let map = match current {
            Value::Object(map) => map,
            other => {
                return Err(PathError::NotObject {
                    path: format_path(&path[..depth]),
                    kind: kind(other),
                })
            }
        };
        current = map.get(step).ok_or_else(|| PathError::NotFound {
            path: format_path(&path[..=depth]),
        })?;
    }
    Ok(current)
}

/// Install `value` at `path`, creating missing objects on the way.
///
/// The root and every intermediate node on the path are forced to be
/// objects: a node of any other shape (including arrays and scalars) is
/// replaced by an empty object, dropping what it held. An empty path
/// replaces the whole document.
///
/// # Example
///
/// ```
/// use cson_path::{parse_path, set};
/// use serde_json::json;
///
/// let mut doc = json!({"a": [1, 2, 3]});
/// set(&mut doc, &parse_path("a.b.c"), json!(true));
/// assert_eq!(doc, json!({"a": {"b": {"c": true}}}));
///
/// set(&mut doc, &[], json!("root"));
/// assert_eq!(doc, json!("root"));
/// ```
pub fn set(doc: &mut Value, path: &[String], value: Value) {
    if is_root(path) {
        *doc = value;
        return;
    }
    vivify(doc, path, 0, value);
}

fn vivify(node: &mut Value, path: &[String], depth: usize, value: Value) {
    if !node.is_object() {
        if !node.is_null() {
            trace!(
                path = %format_path(&path[..depth]),
                kind = kind(node),
                "replacing non-object node with empty object"
            );
        }
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let key = path[depth].clone();
        if depth + 1 == path.len() {
            map.insert(key, value);
        } else {
            let next = map.entry(key).or_insert(Value::Null);
            vivify(next, path, depth + 1, value);
        }
    }
}

/// Name of a value's JSON type, for diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no value at `{path}`")]
    NotFound { path: String },
    #[error("value at `{path}` is {kind}, not an object")]
    NotObject { path: String, kind: &'static str },
}
