use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trip", about = concat!("itinerary v", env!("CARGO_PKG_VERSION"), " - the whole trip in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load a different trip file instead of the built-in one
    #[arg(long = "trip", global = true, value_name = "PATH")]
    pub trip_file: Option<PathBuf>,

    /// Use this config file instead of searching for itinerary.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the days of the trip
    Days,
    /// Show the schedule for one day
    Show(ShowArgs),
    /// Show full details of one item
    Item(ItemArgs),
    /// Show essentials, emergency contacts, flights and hotels
    Reference,
    /// Search items by regex
    Search(SearchArgs),
    /// Validate the trip data
    Check,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Day number (1-based), label (D2) or date (1/25)
    pub day: String,
}

#[derive(Args)]
pub struct ItemArgs {
    /// Item ID
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern to search for (case-insensitive)
    pub pattern: String,
    /// Only items in this category (transport, food, activity, hotel, shopping, other)
    #[arg(long)]
    pub category: Option<String>,
    /// Only items with this tag
    #[arg(long)]
    pub tag: Option<String>,
}
