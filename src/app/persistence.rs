use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const MAX_RECENT_FILES: usize = 10;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecentFiles {
    pub files: Vec<String>,
}

#[must_use]
pub fn get_recent_files_path() -> Option<PathBuf> {
    super::config::config_dir().map(|dir| dir.join("recent_files.toml"))
}

#[must_use]
pub fn load_recent_files_from(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<RecentFiles>(&content) {
            Ok(recent) => recent.files,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable recent files list");
                Vec::new()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read recent files list");
            Vec::new()
        }
    }
}

pub fn save_recent_files_to(path: &Path, files: &[String]) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(dir = %parent.display(), error = %e, "could not create config directory");
            return;
        }
    }

    let recent = RecentFiles {
        files: files.to_vec(),
    };

    match toml::to_string(&recent) {
        Ok(content) => {
            if let Err(e) = std::fs::write(path, content) {
                warn!(path = %path.display(), error = %e, "could not save recent files list");
            }
        }
        Err(e) => warn!(error = %e, "could not encode recent files list"),
    }
}

/// Moves `file` to the front, dropping duplicates and anything past the limit.
pub fn push_recent(files: &mut Vec<String>, file: &str) {
    if let Some(pos) = files.iter().position(|f| f == file) {
        files.remove(pos);
    }
    files.insert(0, file.to_string());
    files.truncate(MAX_RECENT_FILES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_push_recent() {
        let mut files = vec!["a.json".to_string(), "b.json".to_string()];
        push_recent(&mut files, "b.json");
        assert_eq!(files, vec!["b.json", "a.json"]);

        for i in 0..20 {
            push_recent(&mut files, &format!("{i}.json"));
        }
        assert_eq!(files.len(), MAX_RECENT_FILES);
        assert_eq!(files[0], "19.json");
    }

    #[test]
    fn test_recent_files_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("recent_files.toml");
        let files = vec!["vim.json".to_string(), "git.json".to_string()];

        save_recent_files_to(&path, &files);
        assert_eq!(load_recent_files_from(&path), files);
    }

    #[test]
    fn test_garbage_recent_files_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recent_files.toml");
        std::fs::write(&path, "files = 3").unwrap();
        assert!(load_recent_files_from(&path).is_empty());
    }
}
