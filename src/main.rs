//! `project-launcher`: pick a project that sits beside this tool and run the
//! indexer against it.

mod cli;
mod config;
mod project;
mod tools;
mod utils;

use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    cli::run();
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
