use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::selection::Selection;

pub const PROMPT: &str = "Select a project: ";
pub const INVALID_SELECTION: &str = "Invalid selection. Please try again.";

/// Numbered listing, one `N) name` line per entry.
pub fn render_menu(entries: &[PathBuf]) -> String {
    let mut out = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        let name = entry
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| entry.to_string_lossy());
        out.push_str(&format!("{}) {}\n", idx + 1, name));
    }
    out
}

/// Maps a reply to an index into `entries`.
///
/// A number in `1..=len` wins; otherwise the reply must equal an entry's
/// base name exactly.
pub fn parse_reply(reply: &str, entries: &[PathBuf]) -> Option<usize> {
    let reply = reply.trim();
    if reply.is_empty() {
        return None;
    }

    if let Ok(number) = reply.parse::<usize>() {
        return (1..=entries.len()).contains(&number).then(|| number - 1);
    }

    entries
        .iter()
        .position(|entry| entry.file_name().is_some_and(|name| name == reply))
}

/// Shows the menu and reads replies until one is valid.
///
/// Returns `Ok(None)` once `input` is exhausted without a valid reply.
pub fn prompt_selection<R, W>(
    entries: &[PathBuf],
    mut input: R,
    mut output: W,
) -> Result<Option<Selection>>
where
    R: BufRead,
    W: Write,
{
    let menu = render_menu(entries);
    loop {
        write!(output, "{menu}{PROMPT}").context("writing project menu")?;
        output.flush().context("flushing project menu")?;

        // Raw bytes: a reply that is not UTF-8 is just another invalid choice.
        let mut raw = Vec::new();
        let read = input.read_until(b'\n', &mut raw).context("reading selection")?;
        if read == 0 {
            writeln!(output).context("writing project menu")?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);

        match parse_reply(&line, entries) {
            Some(idx) => return Ok(Some(Selection::from_path(&entries[idx]))),
            None => {
                tracing::debug!(reply = line.trim(), "rejected menu reply");
                writeln!(output, "{INVALID_SELECTION}").context("writing project menu")?;
            }
        }
    }
}
