//! CSV-backed table source.
//!
//! The reference files are flat extracts refreshed out-of-band by the
//! upstream PCA/K-Means pipeline. Headers are validated before any row is
//! deserialized so a missing column surfaces as one clear `DataLoad` error
//! instead of per-row parse noise. Empty coordinate cells deserialize to
//! `None` and the row stays loadable for identity lookups.

use std::path::{Path, PathBuf};

use crate::domain::entities::cluster_profile::ClusterProfile;
use crate::domain::entities::store_position::StorePosition;
use crate::domain::error::DomainError;
use crate::domain::ports::table_source::TableSource;

const STORE_COLUMNS: &[&str] = &[
    "store_id",
    "store_name",
    "industry",
    "pc1",
    "pc2",
    "cluster_id",
];

const CLUSTER_COLUMNS: &[&str] = &[
    "industry",
    "cluster_id",
    "cluster_name",
    "store_count",
    "pc1_mean",
    "pc2_mean",
    "characteristics",
];

pub struct CsvTableSource {
    stores_path: PathBuf,
    clusters_path: PathBuf,
}

impl CsvTableSource {
    pub fn new(stores_path: impl Into<PathBuf>, clusters_path: impl Into<PathBuf>) -> Self {
        Self {
            stores_path: stores_path.into(),
            clusters_path: clusters_path.into(),
        }
    }
}

impl TableSource for CsvTableSource {
    fn load_store_positions(&self) -> Result<Vec<StorePosition>, DomainError> {
        read_table(&self.stores_path, STORE_COLUMNS)
    }

    fn load_cluster_profiles(&self) -> Result<Vec<ClusterProfile>, DomainError> {
        read_table(&self.clusters_path, CLUSTER_COLUMNS)
    }
}

fn read_table<T: serde::de::DeserializeOwned>(
    path: &Path,
    required: &[&str],
) -> Result<Vec<T>, DomainError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        DomainError::DataLoad(format!("cannot open {}: {e}", path.display()))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| DomainError::DataLoad(format!("cannot read {} headers: {e}", path.display())))?
        .clone();
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            return Err(DomainError::DataLoad(format!(
                "{} is missing required column '{col}'",
                path.display()
            )));
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        let row = record
            .map_err(|e| DomainError::Parse(format!("{}: {e}", path.display())))?;
        rows.push(row);
    }
    Ok(rows)
}
