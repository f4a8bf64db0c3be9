//! Veneer unified CLI tool.
//!
//! Command-line front end for the proxy generator: reads interface
//! manifests, validates them, and renders forwarding proxy sources.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "veneer")]
#[command(about = "Static proxy generator: interface manifests in, forwarding proxies out", long_about = None)]
#[command(version)]
struct Cli {
    /// Color output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate proxy sources from an interface manifest
    Gen {
        /// Manifest file (.toml or .json)
        manifest: PathBuf,
        /// Output directory for generated sources
        #[arg(short, long, default_value = "generated")]
        out_dir: PathBuf,
        /// Dispatch surface of the generated types
        #[arg(long, value_enum, default_value_t = DispatchArg::Public)]
        dispatch: DispatchArg,
        /// Path prefix for runtime references in emitted code
        #[arg(long, default_value = "veneer_runtime")]
        runtime_path: String,
    },

    /// Validate a manifest without writing anything
    Check {
        /// Manifest file (.toml or .json)
        manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DispatchArg {
    /// Trait impls only
    Explicit,
    /// Trait impls plus inherent public aliases
    Public,
}

impl From<DispatchArg> for veneer_codegen::DispatchMode {
    fn from(arg: DispatchArg) -> Self {
        match arg {
            DispatchArg::Explicit => veneer_codegen::DispatchMode::ExplicitOnly,
            DispatchArg::Public => veneer_codegen::DispatchMode::ExplicitPlusPublic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let color = cli.color;

    match cli.command {
        Commands::Gen {
            manifest,
            out_dir,
            dispatch,
            runtime_path,
        } => {
            let options = veneer_codegen::CodegenOptions {
                dispatch: dispatch.into(),
                runtime_path,
            };
            commands::generate::execute(manifest, out_dir, options, &color)
        }

        Commands::Check { manifest } => commands::check::execute(manifest, &color),
    }
}
