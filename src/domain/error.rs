use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Not JSON, or JSON that is not an array of strings and `{"category": ...}` objects.
    #[error("failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, StoreError::Decode { .. })
    }
}
