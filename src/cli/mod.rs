// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meal-catalog")]
#[command(about = "Meal Catalog - meal pricing, scoring and dietary queries", long_about = None)]
pub struct Cli {
    /// Catalog dataset (JSON)
    #[arg(long, global = true, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// List meals, optionally filtered by diet
    List {
        /// Only vegetarian meals
        #[arg(long)]
        vegetarian: bool,

        /// Only vegan meals
        #[arg(long)]
        vegan: bool,
    },

    /// Show a meal with its ingredient price options
    Show {
        /// Meal ID
        meal_id: i64,
    },

    /// Price a meal at chosen quality tiers (default high)
    Price {
        /// Meal ID
        meal_id: i64,

        /// Quality override, e.g. --quality Rice=low
        #[arg(short, long = "quality")]
        qualities: Vec<String>,
    },

    /// Quality score of a meal at chosen tiers (default high)
    Quality {
        /// Meal ID
        meal_id: i64,

        /// Quality override, e.g. --quality Rice=low
        #[arg(short, long = "quality")]
        qualities: Vec<String>,
    },

    /// Pick a random meal whose ingredient cost fits a budget
    Random {
        /// Maximum price; no limit when omitted
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Search meals by name
    Search {
        /// Search query
        query: String,
    },

    /// Report data-quality problems in the catalog
    Check,
}

impl Commands {
    /// Whether audit findings go to the log on startup; `check` prints them itself
    pub fn logs_audit_at_startup(&self) -> bool {
        !matches!(self, Commands::Check)
    }
}
