//! Dynamically-typed JSON container with dotted-path access.
//!
//! A [`Json`] wraps any decoded JSON value and reads or writes nested fields
//! by dotted path, without a schema:
//!
//! - [`Json::get`] walks objects along the path and never fails; a missing
//!   path yields an empty container.
//! - [`Json::set`] creates missing objects along the path, replacing any
//!   non-object in the way.
//! - Typed accessors (`to_i64`, `to_f64`, `to_bool`, `to_string`, `to_vec`)
//!   coerce leniently and fall back to zero values.
//! - Only the codec (`from_bytes`, `decode`, `to_bytes`) returns errors.
//!
//! Containers returned by `get` share the tree of the container they came
//! from. Use [`SyncJson`] (via [`Json::synchronized`]) to guard a tree with
//! one reader/writer lock and share it between threads.
//!
//! # Example
//!
//! ```
//! use cson::Json;
//! use serde_json::json;
//!
//! let resp: Json = r#"{"h":{"c":0,"e":"","s":1715442247},"c":{"total":3698}}"#
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(resp.get("c.total").to_i64(), 3698);
//! assert_eq!(resp.get("h.s").to_string(), "1715442247");
//! assert!(resp.get("h.missing.deeper").is_nil());
//!
//! resp.set("c.pages", 37);
//! assert_eq!(resp.get("c").value(), json!({"total": 3698, "pages": 37}));
//! ```

mod access;
mod codec;
pub mod error;
mod json;
pub mod store;

pub use error::{Error, Result};
pub use json::{IsNil, Json, SyncJson};
pub use store::{Local, Shared, Store};

// Re-exports
pub use cson_path::{format_path, parse_path, Path, PathError};
pub use serde_json::{json, Map, Value};
