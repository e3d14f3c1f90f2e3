pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use std::path::Path;
use std::sync::Arc;

use crate::application::competitors::{Competitor, CompetitorsUseCase};
use crate::application::lookup::LookupUseCase;
use crate::application::stats::{MapStats, StatsUseCase};
use crate::application::white_space::{WhiteSpaceScan, WhiteSpaceUseCase};
use crate::domain::entities::cluster_profile::ClusterProfile;
use crate::domain::entities::store_position::StorePosition;
use crate::domain::error::DomainError;
use crate::domain::index::PositioningIndex;
use crate::domain::ports::table_source::TableSource;
use crate::infrastructure::csv::CsvTableSource;

/// Facade over the positioning engine: loads the two reference tables once,
/// then answers lookups and spatial queries over the shared immutable index.
#[derive(Debug)]
pub struct PosMap {
    lookup_uc: LookupUseCase,
    competitors_uc: CompetitorsUseCase,
    white_space_uc: WhiteSpaceUseCase,
    stats_uc: StatsUseCase,
}

impl PosMap {
    /// Build from the two CSV reference files.
    pub fn from_csv(
        stores_path: impl AsRef<Path>,
        clusters_path: impl AsRef<Path>,
    ) -> Result<Self, DomainError> {
        let source = CsvTableSource::new(
            stores_path.as_ref().to_path_buf(),
            clusters_path.as_ref().to_path_buf(),
        );
        Self::with_source(Arc::new(source))
    }

    /// Build from any table source (in-memory tables, tests).
    pub fn with_source(source: Arc<dyn TableSource>) -> Result<Self, DomainError> {
        let stores = source.load_store_positions()?;
        let profiles = source.load_cluster_profiles()?;
        let index = Arc::new(PositioningIndex::new(stores, profiles)?);

        Ok(Self {
            lookup_uc: LookupUseCase::new(index.clone()),
            competitors_uc: CompetitorsUseCase::new(index.clone()),
            white_space_uc: WhiteSpaceUseCase::new(index.clone()),
            stats_uc: StatsUseCase::new(index),
        })
    }

    // Delegating methods

    pub fn store_position(&self, store_id: &str) -> Option<StorePosition> {
        self.lookup_uc.store_position(store_id)
    }

    pub fn cluster_profile(&self, industry: &str, cluster_id: &str) -> Option<ClusterProfile> {
        self.lookup_uc.cluster_profile(industry, cluster_id)
    }

    pub fn cluster_profiles(&self, industry: &str) -> Vec<ClusterProfile> {
        self.lookup_uc.cluster_profiles(industry)
    }

    pub fn find_nearby_competitors(&self, store_id: &str, radius: f64) -> Vec<Competitor> {
        self.competitors_uc.execute(store_id, radius)
    }

    pub fn find_white_spaces(
        &self,
        industry: &str,
        grid_resolution: usize,
        min_distance: f64,
    ) -> WhiteSpaceScan {
        self.white_space_uc.execute(industry, grid_resolution, min_distance)
    }

    pub fn stats(&self) -> MapStats {
        self.stats_uc.stats()
    }
}
