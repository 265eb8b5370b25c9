use crate::domain::error::StoreError;
use crate::domain::models::CommandList;
use crate::domain::store::{default_list, CommandStore, MissingFilePolicy};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tracing::{debug, info, warn};

/// Name used when no file was given on the command line or in the config.
pub const DEFAULT_COMMANDS_FILE: &str = "commands.json";

const INDENT: &[u8] = b"    ";

/// Reads and writes the command list as a JSON array on the local filesystem.
///
/// There is no locking: when two processes write the same file the last
/// writer wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore;

impl JsonFileStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Parses the whole document or nothing; a single bad element rejects the list.
/// Bytes that are not UTF-8 are a decode error, not an I/O one.
pub fn decode(content: &[u8]) -> Result<CommandList, serde_json::Error> {
    serde_json::from_slice(content)
}

/// Four-space indented JSON with a trailing newline.
pub fn encode(list: &CommandList) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    list.serialize(&mut ser)?;
    out.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

impl CommandStore for JsonFileStore {
    fn load(&self, path: &Path, policy: MissingFilePolicy) -> Result<CommandList, StoreError> {
        if !path.is_file() {
            info!(path = %path.display(), policy = policy.label(), "commands file not found");
            return Ok(match policy {
                MissingFilePolicy::WithDefaults => default_list(),
                MissingFilePolicy::Strict => CommandList::default(),
            });
        }

        let content = std::fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = decode(&content).map_err(|source| {
            warn!(path = %path.display(), error = %source, "commands file is not a valid list");
            StoreError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!(path = %path.display(), entries = list.len(), "loaded commands");
        Ok(list)
    }

    fn save(&self, path: &Path, list: &CommandList) -> Result<(), StoreError> {
        let content = encode(list).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

        std::fs::write(path, content).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), entries = list.len(), "saved commands");
        Ok(())
    }
}
