// File: src/persistence.rs
use crate::core::anagram::AnagramIndex;
use crate::error::Result;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `bytes` to `path` through a temp file in the same directory, so a
/// crash never leaves a half-written file that would later pass for a cached
/// download.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;

    temp_file.persist(path)?;
    Ok(())
}

/// Dumps the index as a JSON object of signature -> words.
pub fn export_index(index: &AnagramIndex, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    serde_json::to_writer(&mut writer, index)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path)?;
    Ok(())
}
