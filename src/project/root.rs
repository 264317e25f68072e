use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// Resolves the directory whose entries are offered as projects.
///
/// Without an override this is the parent of the directory holding the
/// running executable, with symlinks resolved along the way.
pub fn resolve_project_root(root_override: Option<&Path>) -> Result<PathBuf> {
    let root = match root_override {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("resolving project root {}", path.display()))?,
        None => {
            let exe = std::env::current_exe().context("locating the running executable")?;
            root_from_executable(&exe)?
        }
    };
    tracing::debug!(root = %root.display(), "resolved project root");
    Ok(root)
}

pub(crate) fn root_from_executable(exe: &Path) -> Result<PathBuf> {
    let exe = exe
        .canonicalize()
        .with_context(|| format!("resolving executable path {}", exe.display()))?;
    let tool_dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))?;
    let root = tool_dir
        .parent()
        .ok_or_else(|| anyhow!("tool directory {} has no parent directory", tool_dir.display()))?;
    Ok(root.to_path_buf())
}
