//! Output writing for rendered documents.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{GlossaryError, Result};

/// Write a rendered document to `path`, or to standard output when `None`.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => write_file(content, path),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Write a rendered document to a file, replacing any existing contents.
///
/// The document is written to a temporary file next to the target and then
/// renamed over it, so readers never observe a partial glossary.
pub fn write_file(content: &str, path: &Path) -> Result<()> {
    write_with(path, |file| file.write_all(content.as_bytes()))
}

/// Fill a temporary sibling of `path` with `write`, then rename it over
/// `path`. The temporary file is removed on every failure.
fn write_with(path: &Path, write: impl FnOnce(&mut File) -> io::Result<()>) -> Result<()> {
    let write_error = |source: io::Error| GlossaryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let temp_file = temp_path(path).ok_or_else(|| {
        write_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;

    // Write to temp file first, then sync; the handle closes before cleanup
    let written = File::create(&temp_file).and_then(|mut file| {
        write(&mut file)?;
        file.sync_all()
    });
    if let Err(source) = written {
        let _ = fs::remove_file(&temp_file);
        return Err(write_error(source));
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        if let Err(source) = fs::remove_file(path) {
            let _ = fs::remove_file(&temp_file);
            return Err(write_error(source));
        }
    }

    fs::rename(&temp_file, path).map_err(|source| {
        let _ = fs::remove_file(&temp_file);
        write_error(source)
    })
}

/// Hidden temporary sibling of `path`.
fn temp_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_string_lossy();
    Some(path.with_file_name(format!(".{name}.tmp")))
}
