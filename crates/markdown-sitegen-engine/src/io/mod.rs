use std::fs;
use std::path::{Path, PathBuf};

/// File extension of markdown sources.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Source directory not found: {0}")]
    SourceMissing(PathBuf),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Refusing to replace {dest} because it contains {path}")]
    WouldDeleteInput { path: PathBuf, dest: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Fails with [`IoError::WouldDeleteInput`] if wiping `dest` would also delete
/// `path`, i.e. `dest` is `path` or one of its ancestors.
///
/// Paths that do not exist yet can't be clobbered and always pass.
pub fn ensure_outside(path: &Path, dest: &Path) -> Result<(), IoError> {
    let (Ok(path), Ok(dest)) = (path.canonicalize(), dest.canonicalize()) else {
        return Ok(());
    };
    if path.starts_with(&dest) {
        return Err(IoError::WouldDeleteInput { path, dest });
    }
    Ok(())
}

/// Mirror `source` into `dest`, replacing whatever `dest` held before.
///
/// `dest` is deleted if present, recreated, then filled with a recursive copy
/// of `source`. Returns the number of files copied.
///
/// # Errors
/// [`IoError::WouldDeleteInput`] when `dest` is `source` or contains it.
/// Nothing is deleted in that case.
pub fn publish_static(source: &Path, dest: &Path) -> Result<usize, IoError> {
    if !source.is_dir() {
        return Err(IoError::SourceMissing(source.to_path_buf()));
    }
    ensure_outside(source, dest)?;

    if dest.exists() {
        log::debug!("Removing {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    copy_directory_recursive(source, dest)
}

fn copy_directory_recursive(source: &Path, dest: &Path) -> Result<usize, IoError> {
    let mut copied = 0;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir_all(&to)?;
            copied += copy_directory_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::SourceMissing(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_markdown(&path) {
            files.push(path);
        } else {
            log::debug!("Skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}
