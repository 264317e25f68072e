use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const ROOT_ENV: &str = "LAUNCHER_PROJECT_ROOT";
pub const COMMAND_ENV: &str = "LAUNCHER_COMMAND";
pub const DEFAULT_COMMAND: &str = "cargo run --release";

const CONFIG_CANDIDATES: &[(&str, ConfigFormat)] = &[
    ("launcher.yml", ConfigFormat::Yaml),
    ("launcher.yaml", ConfigFormat::Yaml),
    ("launcher.toml", ConfigFormat::Toml),
];

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn parse(self, content: &str) -> Result<LauncherConfig> {
        match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content).context("parsing YAML"),
            ConfigFormat::Toml => toml::from_str(content).context("parsing TOML"),
        }
    }
}

/// Overrides read from `launcher.yml`/`launcher.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct LauncherConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub command: Option<CommandList>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CommandList {
    Single(String),
    Multiple(Vec<String>),
}

impl CommandList {
    pub fn commands(&self) -> Vec<String> {
        match self {
            CommandList::Single(cmd) => vec![cmd.clone()],
            CommandList::Multiple(cmds) => cmds.clone(),
        }
    }
}

impl Default for CommandList {
    fn default() -> Self {
        CommandList::Single(DEFAULT_COMMAND.to_string())
    }
}

/// Settings after env vars, config file and defaults have been layered.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root_override: Option<PathBuf>,
    pub command: CommandList,
}

impl Settings {
    pub fn resolve(
        env_root: Option<String>,
        env_command: Option<String>,
        file: Option<LauncherConfig>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let root_override = env_root
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .or(file.root);
        let command = env_command
            .filter(|raw| !raw.trim().is_empty())
            .map(CommandList::Single)
            .or(file.command)
            .unwrap_or_default();
        Self {
            root_override,
            command,
        }
    }
}

/// Layers `LAUNCHER_*` env vars over the first `launcher.*` file found in
/// the current directory.
pub fn load_settings() -> Result<Settings> {
    let current_dir = std::env::current_dir().context("resolving current directory for config")?;
    let file = find_config(&current_dir)?;
    if let Some((path, _)) = &file {
        tracing::debug!(path = %path.display(), "loaded launcher config");
    }
    Ok(Settings::resolve(
        std::env::var(ROOT_ENV).ok(),
        std::env::var(COMMAND_ENV).ok(),
        file.map(|(_, config)| config),
    ))
}

fn find_config(dir: &Path) -> Result<Option<(PathBuf, LauncherConfig)>> {
    let Some((path, format)) = CONFIG_CANDIDATES
        .iter()
        .map(|(name, format)| (dir.join(name), *format))
        .find(|(path, _)| path.is_file())
    else {
        return Ok(None);
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("reading launcher config at {}", path.display()))?;
    let config = format
        .parse(&content)
        .with_context(|| format!("loading launcher config at {}", path.display()))?;
    Ok(Some((path, config)))
}
