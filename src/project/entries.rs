use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Lists the immediate entries of `root` the way a shell `*` glob would:
/// files and directories alike, hidden names skipped, sorted by name.
pub fn list_entries(root: &Path) -> Result<Vec<PathBuf>> {
    let reader =
        fs::read_dir(root).with_context(|| format!("listing entries of {}", root.display()))?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry = entry.with_context(|| format!("reading an entry of {}", root.display()))?;
        if is_hidden(&entry.file_name().to_string_lossy()) {
            continue;
        }
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(count = entries.len(), root = %root.display(), "listed project entries");
    Ok(entries)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
