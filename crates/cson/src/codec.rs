//! Conversion to and from JSON text, delegated to `serde_json`.
//!
//! Encoding holds the tree's shared lock for the whole serialization, so a
//! synchronized tree cannot change while it is being written out.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::json::Json;
use crate::store::Store;

impl<S: Store> Json<S> {
    /// Decodes JSON text into a new tree.
    ///
    /// Objects become insertion-ordered maps, arrays vecs; integers stay
    /// integers.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        decode(data).map(Self::wrap)
    }

    /// Replaces the addressed value with decoded JSON text. On error the
    /// tree is left untouched.
    pub fn decode(&self, data: &[u8]) -> Result<&Self> {
        let value = decode(data)?;
        Ok(self.set("", value))
    }

    /// Encodes the addressed value as compact JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.with_value(serde_json::to_vec::<Value>)
            .map_err(encode_error)
    }

    /// Encodes the addressed value as indented JSON.
    pub fn to_bytes_pretty(&self) -> Result<Vec<u8>> {
        self.with_value(serde_json::to_vec_pretty::<Value>)
            .map_err(encode_error)
    }

    /// Encodes the addressed value as a compact JSON string.
    ///
    /// Unlike `to_string()`, strings keep their quotes and `null` is
    /// written out.
    pub fn to_json_string(&self) -> Result<String> {
        self.with_value(serde_json::to_string::<Value>)
            .map_err(encode_error)
    }
}

fn decode(data: &[u8]) -> Result<Value> {
    serde_json::from_slice(data).map_err(|err| {
        debug!(%err, len = data.len(), "failed to decode JSON");
        Error::Decode(err)
    })
}

fn encode_error(err: serde_json::Error) -> Error {
    debug!(%err, "failed to encode JSON");
    Error::Encode(err)
}

impl<S: Store> FromStr for Json<S> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl<S: Store> Serialize for Json<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.with_value(|value| value.serialize(serializer))
    }
}

impl<'de, S: Store> Deserialize<'de> for Json<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::wrap)
    }
}
