//! Crash-safe output files.
//!
//! A page is written to a hidden sibling of the target, flushed to disk, and
//! then renamed over the target, so readers only ever see a complete file.
//! All filesystem access goes through a `cap-std` handle on the target's
//! parent directory.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::error::OutputError;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path`, replacing any existing file atomically.
///
/// # Errors
///
/// Returns [`OutputError::Write`] when `path` does not name a file, when its
/// parent directory cannot be opened, or when any write step fails.
pub(crate) fn write_atomic(path: &Utf8Path, contents: &str) -> Result<(), OutputError> {
    let write_error = |err: &dyn std::fmt::Display| OutputError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let Some(Utf8Component::Normal(file_name)) = path.components().next_back() else {
        return Err(write_error(&"output path must name a file"));
    };
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| write_error(&err))?;

    let temp_name = temp_name_for(file_name);
    if let Err(err) = write_then_rename(&dir, &temp_name, file_name, contents) {
        discard(&dir, &temp_name);
        return Err(write_error(&err));
    }
    sync_dir(&dir);
    Ok(())
}

fn temp_name_for(file_name: &str) -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(".{file_name}.{}.{sequence}.tmp", std::process::id())
}

fn write_then_rename(dir: &Dir, temp_name: &str, file_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(temp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);
    replace(dir, temp_name, file_name)
}

#[cfg(windows)]
fn replace(dir: &Dir, temp_name: &str, file_name: &str) -> io::Result<()> {
    match dir.remove_file(file_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(temp_name, dir, file_name)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, temp_name: &str, file_name: &str) -> io::Result<()> {
    dir.rename(temp_name, dir, file_name)
}

fn discard(dir: &Dir, temp_name: &str) {
    if let Err(err) = dir.remove_file(temp_name) {
        debug!(temp_name, error = %err, "temporary output file was not removed");
    }
}

fn sync_dir(dir: &Dir) {
    if let Err(err) = dir.open(".").and_then(|handle| handle.sync_all()) {
        debug!(error = %err, "output directory sync skipped");
    }
}
