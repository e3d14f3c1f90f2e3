use crate::domain::entities::cluster_profile::ClusterProfile;
use crate::domain::entities::store_position::StorePosition;
use crate::domain::index::PositioningIndex;
use std::sync::Arc;

/// Identity lookups over the loaded tables. `None` is an expected outcome
/// (e.g. a store absent from the positioning extract), never an error.
#[derive(Debug)]
pub struct LookupUseCase {
    index: Arc<PositioningIndex>,
}

impl LookupUseCase {
    pub fn new(index: Arc<PositioningIndex>) -> Self {
        Self { index }
    }

    pub fn store_position(&self, store_id: &str) -> Option<StorePosition> {
        self.index.store_position(store_id).cloned()
    }

    pub fn cluster_profile(&self, industry: &str, cluster_id: &str) -> Option<ClusterProfile> {
        self.index.cluster_profile(industry, cluster_id).cloned()
    }

    pub fn cluster_profiles(&self, industry: &str) -> Vec<ClusterProfile> {
        self.index
            .cluster_profiles(industry)
            .into_iter()
            .cloned()
            .collect()
    }
}
