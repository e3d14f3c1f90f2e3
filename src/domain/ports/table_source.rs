use crate::domain::entities::cluster_profile::ClusterProfile;
use crate::domain::entities::store_position::StorePosition;
use crate::domain::error::DomainError;

/// Supplies the two reference tables the engine is built from.
///
/// Implementations own file formats and parsing; the domain only sees parsed
/// records. Tables are static reference data refreshed out-of-band, so a
/// source is read once per index construction.
pub trait TableSource: Send + Sync {
    fn load_store_positions(&self) -> Result<Vec<StorePosition>, DomainError>;
    fn load_cluster_profiles(&self) -> Result<Vec<ClusterProfile>, DomainError>;
}
