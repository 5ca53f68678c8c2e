use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom};
use std::path::Path;

pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).with_context(|| format!("create_dir_all {path:?}"))
}

/// Opens for reading and writing, creating if missing, and takes an advisory exclusive lock.
/// The file is truncated only after the lock is held.
///
/// Returns the bare [`io::Error`], for callers that classify it.
pub fn open_locked_exclusive<P: AsRef<Path>>(path: P) -> io::Result<File> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.try_lock_exclusive()?;
    file.set_len(0)?;
    Ok(file)
}

pub fn seek<P: AsRef<Path>>(
    mut seekable: impl Seek,
    sf: SeekFrom,
    implicit_path: P,
) -> Result<u64> {
    seekable
        .seek(sf)
        .with_context(|| format!("seek {:?}", implicit_path.as_ref()))
}

pub fn truncate<P: AsRef<Path>>(file: &File, implicit_path: P) -> Result<()> {
    file.set_len(0)
        .with_context(|| format!("set_len {:?}", implicit_path.as_ref()))
}

pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).with_context(|| format!("remove_file {path:?}"))
}
