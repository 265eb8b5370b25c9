use crate::domain::models::CommandList;
use crate::domain::store::MissingFilePolicy;
use std::path::PathBuf;

/// Side effects requested by the reducer and run against a `CommandStore`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(PathBuf, MissingFilePolicy),
    Save(PathBuf, CommandList),
}
