//! Shared test helpers.

use posmap::domain::entities::cluster_profile::ClusterProfile;
use posmap::domain::entities::store_position::StorePosition;
use posmap::infrastructure::memory::StaticTableSource;
use posmap::PosMap;
use std::sync::Arc;

pub fn store(
    id: &str,
    name: &str,
    industry: &str,
    pc1: Option<f64>,
    pc2: Option<f64>,
    cluster_id: &str,
) -> StorePosition {
    StorePosition {
        store_id: id.to_string(),
        store_name: name.to_string(),
        industry: industry.to_string(),
        pc1,
        pc2,
        cluster_id: cluster_id.to_string(),
    }
}

pub fn profile(industry: &str, cluster_id: &str, name: &str) -> ClusterProfile {
    ClusterProfile {
        industry: industry.to_string(),
        cluster_id: cluster_id.to_string(),
        cluster_name: name.to_string(),
        store_count: 0,
        pc1_mean: 0.0,
        pc2_mean: 0.0,
        characteristics: format!("{name} segment"),
    }
}

pub fn posmap(stores: Vec<StorePosition>, profiles: Vec<ClusterProfile>) -> PosMap {
    PosMap::with_source(Arc::new(StaticTableSource::new(stores, profiles))).unwrap()
}

/// Standard fixture:
/// - "cafe": five stores packed around the origin, one far outlier, one
///   store with no coordinates.
/// - "gym": a single positioned store.
/// - "mart": two stores at opposite corners of the map.
pub fn fixture() -> PosMap {
    let stores = vec![
        store("c1", "Center Cafe", "cafe", Some(0.0), Some(0.0), "0"),
        store("c2", "East Cafe", "cafe", Some(0.005), Some(0.0), "0"),
        store("c3", "North Cafe", "cafe", Some(0.0), Some(0.008), "0"),
        store("c4", "West Cafe", "cafe", Some(-0.006), Some(0.002), "1"),
        store("c5", "South Cafe", "cafe", Some(-0.005), Some(0.0), "1"),
        store("c6", "Far Cafe", "cafe", Some(5.0), Some(5.0), "1"),
        store("c7", "Unmapped Cafe", "cafe", None, None, "0"),
        store("g1", "Solo Gym", "gym", Some(1.0), Some(1.0), "A"),
        store("m1", "Corner Mart SW", "mart", Some(-10.0), Some(-10.0), "0"),
        store("m2", "Corner Mart NE", "mart", Some(10.0), Some(10.0), "0"),
    ];
    let profiles = vec![
        profile("cafe", "0", "Value seekers"),
        profile("cafe", "1", "Premium specialty"),
        profile("gym", "A", "Neighborhood fitness"),
        profile("mart", "0", "General retail"),
    ];
    posmap(stores, profiles)
}
