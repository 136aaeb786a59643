// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalogx - custom product types, options and tabs for a store's product editor.
//!
//! This is the binary entry point. It resolves declaration manifests into a
//! registry and prints the requested view of it.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{ManifestSources, Output};

/// Catalogx - resolve product declarations and render edit screen assets.
#[derive(Parser, Debug)]
#[command(name = "catalogx", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the standard lookup.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Declaration manifest to apply; may be repeated.
    #[arg(long = "manifest", global = true)]
    manifests: Vec<PathBuf>,

    /// Directory of declaration manifests, applied by file name.
    #[arg(long, global = true)]
    manifest_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Print the resolved registry as JSON.
    Resolve,
    /// Print the type selector additions.
    Types,
    /// Print the option checkbox fields.
    Options,
    /// Print the product data tabs in priority order.
    Tabs,
    /// Print the visibility wiring plan.
    Wiring,
    /// Print the tab icon stylesheet for the product edit screen.
    Css,
    /// Print the visibility script for the product edit screen.
    Script,
}

impl From<Commands> for Output {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Resolve => Output::Registry,
            Commands::Types => Output::Types,
            Commands::Options => Output::Options,
            Commands::Tabs => Output::Tabs,
            Commands::Wiring => Output::Wiring,
            Commands::Css => Output::Css,
            Commands::Script => Output::Script,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => catalogx_config::load_and_validate_path(path),
        None => catalogx_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            catalogx_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let extra = ManifestSources {
        paths: cli.manifests,
        dir: cli.manifest_dir,
    };

    let result = commands::build_registry(&config, &extra)
        .and_then(|registry| commands::render(cli.command.into(), &registry, &config));

    match result {
        Ok(out) if out.is_empty() => {}
        Ok(out) => println!("{}", out.trim_end()),
        Err(e) => {
            tracing::error!(error = %e, "catalogx failed");
            eprintln!("catalogx: {e}");
            std::process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber on stderr with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalogx={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
