//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Batch arithmetic calculator: evaluates expression-tree documents and writes result documents
#[derive(Parser, Debug)]
#[command(name = "rscalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions to stdout
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression document and write the result document
    Eval {
        /// Expression document
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Result document path (default: from settings)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Write the result document without pretty-printing
        #[arg(long)]
        compact: bool,
    },

    /// Evaluate and print one result per line to stdout
    Print {
        /// Expression document
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Validate an expression document without evaluating
    Check {
        /// Expression document
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Show each expression as a tree
    Tree {
        /// Expression document
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
