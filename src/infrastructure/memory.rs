use crate::domain::entities::cluster_profile::ClusterProfile;
use crate::domain::entities::store_position::StorePosition;
use crate::domain::error::DomainError;
use crate::domain::ports::table_source::TableSource;

/// In-memory table source for callers that already hold parsed tables
/// (and for tests).
pub struct StaticTableSource {
    stores: Vec<StorePosition>,
    profiles: Vec<ClusterProfile>,
}

impl StaticTableSource {
    pub fn new(stores: Vec<StorePosition>, profiles: Vec<ClusterProfile>) -> Self {
        Self { stores, profiles }
    }
}

impl TableSource for StaticTableSource {
    fn load_store_positions(&self) -> Result<Vec<StorePosition>, DomainError> {
        Ok(self.stores.clone())
    }

    fn load_cluster_profiles(&self) -> Result<Vec<ClusterProfile>, DomainError> {
        Ok(self.profiles.clone())
    }
}
