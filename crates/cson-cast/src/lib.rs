//! cson-cast - lenient coercions for `serde_json` values
//!
//! Every conversion in this crate is total: a value that cannot be
//! interpreted as the requested type produces that type's zero value
//! (`0`, `0.0`, `false`, `""`, empty vec) instead of an error.

pub mod boolean;
pub mod json_equal;
pub mod number;
pub mod slice;
pub mod string;

// Re-exports for convenience
pub use boolean::{parse_bool, to_bool};
pub use json_equal::deep_equal;
pub use number::{parse_int, to_f64, to_i64};
pub use slice::to_vec;
pub use string::to_string;
