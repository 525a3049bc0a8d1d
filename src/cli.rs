use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::view::{AiVariant, FilterMode, View, ViewContext};

#[derive(Debug, Parser)]
#[command(author, version, about = "Resolve grid columns and rows from columnar snapshots", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the filtered column schema of a snapshot file
    Schema(SchemaArgs),
    /// Resolve and print the column configurations for a view
    Columns(ColumnsArgs),
    /// Render the first rows of a snapshot through the resolved configuration
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Report view to resolve
    #[arg(long, value_enum, default_value_t = View::RecentGames)]
    pub view: View,
    /// AI variant the snapshot was produced for
    #[arg(long, value_enum)]
    pub ai: Option<AiVariant>,
    /// Filter preset the snapshot was produced for
    #[arg(long, value_enum)]
    pub filter: Option<FilterMode>,
}

impl ViewArgs {
    pub fn context(&self) -> ViewContext {
        ViewContext {
            view: self.view,
            variant: self.ai,
            filter: self.filter,
        }
    }
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Input snapshot file (decoded JSON)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    /// Input snapshot file (decoded JSON)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
    /// Write the resolved configurations to this YAML file
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input snapshot file (decoded JSON)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
    /// Number of rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
}
