use thiserror::Error;

/// Errors surfaced by the JSON codec. Nothing else in this crate fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(serde_json::Error),

    #[error(transparent)]
    Decode(serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
