use crate::types::{ColorMode, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qshowcase")]
#[command(about = "Quantum teleportation project showcase and deep dive", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Color policy (overrides config)")]
    pub color: Option<ColorMode>,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render the page for one topic
    Show {
        #[arg(short, long, help = "Menu label or slug (e.g. \"history\")")]
        topic: Option<String>,

        #[arg(long, help = "Omit the intro listing and footer")]
        section_only: bool,
    },

    /// List the sidebar topics in menu order
    Topics,

    /// Print the Q# teleportation listing
    Code,

    /// Interactive terminal UI with a sidebar menu
    Browse {
        #[arg(short, long, help = "Initially selected label or slug")]
        topic: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Show {
            topic: None,
            section_only: false,
        }
    }
}
