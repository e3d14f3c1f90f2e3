use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "posmap", about = "Market-positioning analysis over PCA store maps")]
pub struct Cli {
    /// Store positioning CSV (falls back to POSMAP_STORES)
    #[arg(long, global = true)]
    pub stores: Option<String>,
    /// Cluster profile CSV (falls back to POSMAP_CLUSTERS)
    #[arg(long, global = true)]
    pub clusters: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a store's map position
    Position {
        store_id: String,
    },
    /// Nearby competitors within a radius of a store
    Competitors {
        store_id: String,
        /// Search radius in (PC1, PC2) units
        #[arg(long, default_value = "1.5")]
        radius: f64,
    },
    /// Detect white spaces on an industry's positioning map
    Whitespace {
        industry: String,
        /// Lattice points per axis
        #[arg(long, default_value = "20")]
        grid: usize,
        /// Minimum distance to the nearest store for a point to qualify
        #[arg(long, default_value = "0.8")]
        min_distance: f64,
    },
    /// Look up one cluster profile
    Cluster {
        industry: String,
        cluster_id: String,
    },
    /// List all cluster profiles of an industry
    Clusters {
        industry: String,
    },
    /// Show the shape of the loaded map
    Stats,
}
