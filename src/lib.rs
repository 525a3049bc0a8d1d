pub mod cli;
pub mod columns_cmd;
pub mod config;
pub mod data;
pub mod format;
pub mod order;
pub mod preview;
pub mod rows;
pub mod rules;
pub mod schema;
pub mod schema_cmd;
pub mod snapshot;
pub mod table;
pub mod view;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("snapgrid", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Schema(args) => schema_cmd::execute(&args),
        Commands::Columns(args) => columns_cmd::execute(&args),
        Commands::Preview(args) => preview::execute(&args),
    }
}
