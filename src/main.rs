//! AIPackr CLI - runs the planning engine over JSON inputs.
//!
//! Commands:
//! - `plan`         - Daily outfits and packing list for a whole trip
//! - `pack`         - Packing selection for a set of items and a bag
//! - `analyze`      - Space utilization of items in a bag
//! - `suggest-bag`  - Smallest bag that fits the items

use std::path::{Path, PathBuf};

use aipackr::{AipackrConfig, BagSize, ClothingItem, PackingEngine, Trip};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "aipackr",
    about = "AIPackr - Outfit planning and packing optimization for multi-day trips",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan outfits and packing for a trip described in a JSON file
    Plan {
        /// Trip JSON file
        #[arg(short, long)]
        trip: PathBuf,
    },

    /// Select what to pack from a JSON array of items
    Pack {
        /// Items JSON file
        #[arg(short, long)]
        items: PathBuf,
        /// Bag size (carry_on, backpack, duffel, checked_small, checked_medium, checked_large)
        #[arg(short, long)]
        bag: Option<BagSize>,
        /// Essential keyword; repeat for more
        #[arg(short, long = "essential")]
        essential: Vec<String>,
    },

    /// Report how much of a bag the items use
    Analyze {
        /// Items JSON file
        #[arg(short, long)]
        items: PathBuf,
        /// Bag size
        #[arg(short, long)]
        bag: Option<BagSize>,
    },

    /// Suggest the smallest bag that fits the items
    SuggestBag {
        /// Items JSON file
        #[arg(short, long)]
        items: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AipackrConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    init_tracing(&config, cli.verbose);
    debug!("Loaded configuration: {:?}", config);

    let engine = PackingEngine::from_config(&config)?;
    let default_bag = config.packing.default_bag_size;

    match cli.command {
        Commands::Plan { trip } => {
            let trip: Trip = read_json(&trip)?;
            print_json(&engine.recommend_trip(&trip))?;
        }
        Commands::Pack {
            items,
            bag,
            essential,
        } => {
            let items: Vec<ClothingItem> = read_json(&items)?;
            let essential = if essential.is_empty() {
                config.packing.essential_keywords.clone()
            } else {
                essential
            };
            let plan = engine.optimize_packing(&items, &essential, bag.unwrap_or(default_bag));
            print_json(&plan)?;
        }
        Commands::Analyze { items, bag } => {
            let items: Vec<ClothingItem> = read_json(&items)?;
            print_json(&engine.analyze_space(&items, bag.unwrap_or(default_bag)))?;
        }
        Commands::SuggestBag { items } => {
            let items: Vec<ClothingItem> = read_json(&items)?;
            print_json(&engine.suggest_bag_size(&items))?;
        }
    }

    Ok(())
}

fn init_tracing(config: &AipackrConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
