use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Runs `command` through the platform shell with inherited stdio and the
/// given extra environment. Returns the child's exit code.
pub fn run_shell_with_env(command: &str, envs: &[(&str, OsString)]) -> Result<i32> {
    let mut cmd = shell_command(command);
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    for (key, value) in envs {
        cmd.env(key, value);
    }

    tracing::debug!(%command, "spawning shell command");
    let status = cmd
        .status()
        .with_context(|| format!("running shell command: {command}"))?;

    // No code means the child was terminated by a signal.
    Ok(status.code().unwrap_or(1))
}

/// Runs each command in order, stopping at the first non-zero exit code.
pub fn run_commands_with_env(
    label: &str,
    commands: &[String],
    envs: &[(&str, OsString)],
) -> Result<i32> {
    if commands.is_empty() {
        bail!("no commands defined for {label}");
    }

    for (idx, cmd) in commands.iter().enumerate() {
        if commands.len() > 1 {
            println!("[{label}] step {} -> {}", idx + 1, cmd);
        }
        let code = run_shell_with_env(cmd, envs)?;
        if code != 0 {
            return Ok(code);
        }
    }

    Ok(0)
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C");
    cmd.arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c");
    cmd.arg(command);
    cmd
}
