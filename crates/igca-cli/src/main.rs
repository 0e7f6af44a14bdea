use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod analyze;

#[derive(Debug, Parser)]
#[command(name = "igca-cli")]
#[command(about = "IGCA command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full analysis and write the derived tables as JSON files.
    Analyze {
        /// Profile export; defaults to IGCA_PROFILE_PATH.
        #[arg(long)]
        profiles: Option<PathBuf>,
        /// Post export; defaults to IGCA_POST_PATH.
        #[arg(long)]
        posts: Option<PathBuf>,
        /// Analysis brief YAML; defaults to IGCA_BRIEF_PATH. The brief's
        /// client is highlighted in the rankings.
        #[arg(long)]
        brief: Option<PathBuf>,
        /// Output directory; defaults to IGCA_REPORTS_PATH.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Ranking depth; defaults to IGCA_TOP_N.
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Print per-profile KPI rows as JSON to stdout.
    Kpis {
        #[arg(long)]
        profiles: Option<PathBuf>,
        #[arg(long)]
        posts: Option<PathBuf>,
    },
    /// Flatten a search export into candidate-profile rows.
    Search {
        /// Search export; defaults to IGCA_SEARCH_PATH.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = igca_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            profiles,
            posts,
            brief,
            out,
            top_n,
        } => analyze::run_analyze(&config, profiles, posts, brief, out, top_n),
        Commands::Kpis { profiles, posts } => analyze::run_kpis(&config, profiles, posts),
        Commands::Search { input } => analyze::run_search(&config, input),
    }
}
