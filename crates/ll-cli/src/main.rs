//! CLI frontend for the Lootlens loot table viewer.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::Overrides;

#[derive(Parser)]
#[command(
    name = "lootlens",
    about = "Lootlens — drop chances for datapack loot tables",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: lootlens.json in the data directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Namespace whose refs/ tables are expanded (overrides the config)
    #[arg(long, global = true)]
    namespace: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show drops of every catalog mob, grouped by biome and rarity
    Overview {
        /// Only show mobs or items whose name contains this term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Datapack data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show the direct drops of one table
    Show {
        /// Canonical table path (e.g. infinity_cave/loot_table/mobs/forest/common/zombie)
        table: String,

        /// Datapack data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show the gear table of a tier
    Gear {
        /// Tier name (e.g. epic)
        tier: String,

        /// Datapack data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show the shared table of a biome and rarity
    Tier {
        /// Biome name (e.g. forest)
        biome: String,

        /// Rarity name (e.g. rare)
        rarity: String,

        /// Datapack data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Expand a reference into everything it can ultimately drop
    Flatten {
        /// Raw reference (e.g. infinity_cave:refs/forest/common)
        reference: String,

        /// Chance of reaching the reference (e.g. 50% or 50.00%)
        #[arg(short, long, default_value = "100%")]
        chance: String,

        /// Datapack data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Load every table and report broken references
    Check {
        /// Datapack data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Export the drops of a table as JSON
    Export {
        /// Canonical table path
        table: String,

        /// Expand references recursively
        #[arg(short, long)]
        flatten: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Datapack data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let overrides = Overrides {
        config: cli.config.as_deref(),
        namespace: cli.namespace.as_deref(),
    };

    let result = match cli.command {
        Commands::Overview { search, dir } => commands::overview::run(&dir, &overrides, &search),
        Commands::Show { table, dir } => commands::show::run(&dir, &overrides, &table),
        Commands::Gear { tier, dir } => commands::gear::run(&dir, &overrides, &tier),
        Commands::Tier { biome, rarity, dir } => {
            commands::tier::run(&dir, &overrides, &biome, &rarity)
        }
        Commands::Flatten {
            reference,
            chance,
            dir,
        } => commands::flatten::run(&dir, &overrides, &reference, &chance),
        Commands::Check { dir } => commands::check::run(&dir, &overrides),
        Commands::Export {
            table,
            flatten,
            output,
            dir,
        } => commands::export::run(&dir, &overrides, &table, flatten, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
