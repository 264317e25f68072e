use anyhow::Result;

use crate::config::CommandList;
use crate::project::selection::{Embedding, Selection};
use crate::utils::shell;

/// Runs the indexing command for `selection` and returns its exit code.
pub fn launch(selection: &Selection, embedding: Embedding, command: &CommandList) -> Result<i32> {
    println!("Selected project: {}", selection.path.display());

    let envs = selection.env_vars(embedding);
    let display_name = selection.name.to_string_lossy();
    tracing::info!(
        collection = %display_name,
        project_dir = %selection.path.display(),
        %embedding,
        "launching indexer"
    );

    let code = shell::run_commands_with_env(
        &format!("launch:{display_name}"),
        &command.commands(),
        &envs,
    )?;
    if code != 0 {
        tracing::warn!(code, "launched command exited with a failure status");
    }
    Ok(code)
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn launch_exports_selection_to_the_command() {
        let tmp = tempdir().expect("tempdir");
        let project = tmp.path().join("beta");
        fs::create_dir(&project).expect("project");
        let log = tmp.path().join("env.log");
        let command = CommandList::Single(format!(
            "printf '%s|%s|%s' \"$COLLECTION\" \"$PROJECT_DIR\" \"$EMBEDDING\" > '{}'",
            log.display()
        ));

        let code = launch(&Selection::from_path(&project), Embedding::Enabled, &command)
            .expect("launch");

        assert_eq!(code, 0);
        assert_eq!(
            fs::read_to_string(&log).expect("log"),
            format!("beta|{}|true", project.display())
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn launch_exports_non_utf8_entry_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir().expect("tempdir");
        let project = tmp.path().join(OsStr::from_bytes(b"caf\xe9"));
        fs::create_dir(&project).expect("project");
        let log = tmp.path().join("collection.log");
        let command = CommandList::Single(format!(
            "test -d \"$PROJECT_DIR\" && printf '%s' \"$COLLECTION\" > '{}'",
            log.display()
        ));

        let code = launch(&Selection::from_path(&project), Embedding::Enabled, &command)
            .expect("launch");

        assert_eq!(code, 0);
        assert_eq!(fs::read(&log).expect("log"), b"caf\xe9");
    }

    #[test]
    fn launch_propagates_failure_code() {
        let tmp = tempdir().expect("tempdir");
        let command = CommandList::Single("exit 42".to_string());

        let code = launch(
            &Selection::from_path(&tmp.path().join("alpha")),
            Embedding::Disabled,
            &command,
        )
        .expect("launch");
        assert_eq!(code, 42);
    }
}
