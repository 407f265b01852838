//! Command-line interface for plan-picker.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Walk the selection steps with the given constraints and print matching layouts
//! - **catalog**: List, show, or export layouts from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Everything between 20 and 40 m², closest to 30 m² first
//! plan-picker find --min-area 20 --max-area 40
//!
//! # Square room, entry in the middle, storage door on the front wall
//! plan-picker find --shape square --entry center --storage top-center
//!
//! # JSON output for scripting
//! plan-picker find --min-area 30 --sort area-desc --format json
//!
//! # Inspect a mirrored layout
//! plan-picker catalog show 1022
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod find;

#[derive(Parser)]
#[command(name = "plan-picker")]
#[command(version)]
#[command(about = "Pick a pick-up point floor plan by area, shape and door placement")]
#[command(
    long_about = "plan-picker matches your constraints against a catalog of pre-defined pick-up point floor plans (each also available mirrored) and provides:\n- Exact matches, best match first\n- Similar layouts sharing the storage wall when nothing matches exactly\n- Catalog codes for ordering"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find layouts matching area, shape and door constraints
    Find(find::FindArgs),

    /// Browse the layout catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
