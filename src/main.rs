use clap::Parser;
use posmap::cli::commands::{Cli, Commands};
use posmap::PosMap;

fn main() {
    let cli = Cli::parse();

    let stores = cli
        .stores
        .clone()
        .or_else(|| std::env::var("POSMAP_STORES").ok())
        .unwrap_or_else(|| "./store_positioning.csv".into());
    let clusters = cli
        .clusters
        .clone()
        .or_else(|| std::env::var("POSMAP_CLUSTERS").ok())
        .unwrap_or_else(|| "./cluster_profiles.csv".into());

    let map = match PosMap::from_csv(&stores, &clusters) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error loading positioning tables: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(map, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(map: PosMap, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Position { store_id } => match map.store_position(&store_id) {
            Some(position) => println!("{}", serde_json::to_string_pretty(&position)?),
            None => println!(
                "{}",
                serde_json::json!({ "found": false, "store_id": store_id })
            ),
        },
        Commands::Competitors { store_id, radius } => {
            let competitors = map.find_nearby_competitors(&store_id, radius);
            println!("{}", serde_json::to_string_pretty(&competitors)?);
        }
        Commands::Whitespace {
            industry,
            grid,
            min_distance,
        } => {
            let scan = map.find_white_spaces(&industry, grid, min_distance);
            println!("{}", serde_json::to_string_pretty(&scan)?);
        }
        Commands::Cluster {
            industry,
            cluster_id,
        } => match map.cluster_profile(&industry, &cluster_id) {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => println!(
                "{}",
                serde_json::json!({ "found": false, "industry": industry, "cluster_id": cluster_id })
            ),
        },
        Commands::Clusters { industry } => {
            let profiles = map.cluster_profiles(&industry);
            println!("{}", serde_json::to_string_pretty(&profiles)?);
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&map.stats())?);
        }
    }
    Ok(())
}
