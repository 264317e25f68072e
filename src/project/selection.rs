use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

pub const COLLECTION_ENV: &str = "COLLECTION";
pub const PROJECT_DIR_ENV: &str = "PROJECT_DIR";
pub const EMBEDDING_ENV: &str = "EMBEDDING";

/// Whether the launched tool should compute embeddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Embedding {
    #[default]
    Enabled,
    Disabled,
}

impl Embedding {
    pub fn as_env_value(self) -> &'static str {
        match self {
            Embedding::Enabled => "true",
            Embedding::Disabled => "false",
        }
    }
}

impl fmt::Display for Embedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_env_value())
    }
}

/// The entry the user picked from the menu.
///
/// Name and path keep the raw bytes from disk; entries whose names are not
/// valid UTF-8 are still handed to the launched tool unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: OsString,
    pub path: PathBuf,
}

impl Selection {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        Self {
            name,
            path: path.to_path_buf(),
        }
    }

    /// Variables handed to the launched tool.
    pub fn env_vars(&self, embedding: Embedding) -> Vec<(&'static str, OsString)> {
        vec![
            (COLLECTION_ENV, self.name.clone()),
            (PROJECT_DIR_ENV, self.path.clone().into_os_string()),
            (EMBEDDING_ENV, OsString::from(embedding.as_env_value())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_defaults_to_enabled() {
        assert_eq!(Embedding::default(), Embedding::Enabled);
        assert_eq!(Embedding::Enabled.to_string(), "true");
        assert_eq!(Embedding::Disabled.to_string(), "false");
    }

    #[test]
    fn selection_takes_name_from_base_name() {
        let selection = Selection::from_path(Path::new("/work/projects/beta"));
        assert_eq!(selection.name, "beta");
        assert_eq!(selection.path, PathBuf::from("/work/projects/beta"));
    }

    #[test]
    fn env_vars_cover_collection_dir_and_flag() {
        let selection = Selection::from_path(Path::new("/work/projects/alpha"));
        assert_eq!(
            selection.env_vars(Embedding::Disabled),
            vec![
                ("COLLECTION", OsString::from("alpha")),
                ("PROJECT_DIR", OsString::from("/work/projects/alpha")),
                ("EMBEDDING", OsString::from("false")),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_exported_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("/work/projects").join(OsStr::from_bytes(b"caf\xe9"));
        let selection = Selection::from_path(&path);
        let envs = selection.env_vars(Embedding::Enabled);

        assert_eq!(envs[0].1.as_bytes(), b"caf\xe9");
        assert_eq!(envs[1].1.as_bytes(), b"/work/projects/caf\xe9");
    }
}
