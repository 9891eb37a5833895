use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Existing,
    Created,
}

/// Make sure `path` is a directory, creating it and any missing parents.
pub fn ensure_directory(path: &Path) -> io::Result<DirectoryState> {
    if path.is_dir() {
        return Ok(DirectoryState::Existing);
    }
    fs::create_dir_all(path)?;
    Ok(DirectoryState::Created)
}
