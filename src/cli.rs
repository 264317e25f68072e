use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;
use clap::error::{ContextKind, ContextValue};

use crate::config;
use crate::project::entries::list_entries;
use crate::project::menu::prompt_selection;
use crate::project::root::resolve_project_root;
use crate::project::selection::Embedding;
use crate::tools::launcher;

const NO_EMBEDDING_FLAG: &str = "--no-embedding";

/// Root CLI for project-launcher
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "project-launcher")]
#[command(about = "Pick a sibling project and launch the indexer for it")]
#[command(args_override_self = true)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Launch with EMBEDDING=false
    #[arg(long)]
    pub no_embedding: bool,
}

impl Cli {
    pub fn embedding(&self) -> Embedding {
        if self.no_embedding {
            Embedding::Disabled
        } else {
            Embedding::Enabled
        }
    }
}

/// Outcome of reading the command line.
#[derive(Debug)]
pub enum ParsedArgs {
    Run(Cli),
    /// A token we do not understand; carries the token as typed.
    Unknown(String),
}

pub fn parse_args<I, T>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // clap swallows a bare `--`, so every raw token is checked first.
    if let Some(token) = args
        .iter()
        .skip(1)
        .find(|arg| arg.as_os_str() != NO_EMBEDDING_FLAG)
    {
        return ParsedArgs::Unknown(token.to_string_lossy().to_string());
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) => ParsedArgs::Run(cli),
        Err(err) => ParsedArgs::Unknown(offending_token(&err, &args)),
    }
}

fn offending_token(err: &clap::Error, args: &[OsString]) -> String {
    if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
        if arg != NO_EMBEDDING_FLAG {
            return arg.clone();
        }
    }
    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().to_string())
        .find(|arg| arg != NO_EMBEDDING_FLAG)
        .unwrap_or_else(|| err.kind().to_string())
}

/// Dispatch after parse
pub fn run() {
    let cli = match parse_args(std::env::args_os()) {
        ParsedArgs::Run(cli) => cli,
        ParsedArgs::Unknown(token) => {
            println!("Unknown parameter passed: {token}");
            std::process::exit(1);
        }
    };

    match execute(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error (launch): {e:#}");
            std::process::exit(1);
        }
    }
}

fn execute(cli: &Cli) -> Result<i32> {
    let settings = config::load_settings()?;
    let root = resolve_project_root(settings.root_override.as_deref())?;
    let entries = list_entries(&root)?;

    let stdin = io::stdin();
    let Some(selection) = prompt_selection(&entries, stdin.lock(), io::stdout())? else {
        tracing::debug!("input exhausted without a selection");
        return Ok(0);
    };

    launcher::launch(&selection, cli.embedding(), &settings.command)
}
