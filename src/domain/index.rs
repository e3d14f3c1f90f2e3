//! In-memory positioning index: the single owner of the loaded tables.
//!
//! Construction validates the tables once; after that the index is immutable
//! and safe to share across threads behind an `Arc`. All spatial queries are
//! partitioned by industry — cross-industry distances are meaningless and
//! never computed.

use std::collections::HashMap;

use crate::domain::entities::cluster_profile::ClusterProfile;
use crate::domain::entities::store_position::StorePosition;
use crate::domain::error::DomainError;
use crate::domain::values::point::Point;

#[derive(Debug)]
pub struct PositioningIndex {
    stores: Vec<StorePosition>,
    profiles: Vec<ClusterProfile>,
    /// (industry, cluster_id) -> index into `profiles`.
    profile_keys: HashMap<(String, String), usize>,
}

impl PositioningIndex {
    /// Build the index from already-parsed tables.
    ///
    /// Fails fast on malformed input: either table empty, or a store row
    /// referencing an `(industry, cluster_id)` with no profile. Rows with
    /// missing coordinates are accepted; they are skipped by spatial queries
    /// but still resolvable by id.
    pub fn new(
        stores: Vec<StorePosition>,
        profiles: Vec<ClusterProfile>,
    ) -> Result<Self, DomainError> {
        if stores.is_empty() {
            return Err(DomainError::DataLoad(
                "store positioning table is empty".to_string(),
            ));
        }
        if profiles.is_empty() {
            return Err(DomainError::DataLoad(
                "cluster profile table is empty".to_string(),
            ));
        }

        let mut profile_keys = HashMap::new();
        for (i, p) in profiles.iter().enumerate() {
            // First profile wins on duplicate keys, same as store lookups.
            profile_keys
                .entry((p.industry.clone(), p.cluster_id.clone()))
                .or_insert(i);
        }

        for s in &stores {
            let key = (s.industry.clone(), s.cluster_id.clone());
            if !profile_keys.contains_key(&key) {
                return Err(DomainError::DataLoad(format!(
                    "store {} references cluster {}/{} with no profile row",
                    s.store_id, s.industry, s.cluster_id
                )));
            }
        }

        Ok(PositioningIndex {
            stores,
            profiles,
            profile_keys,
        })
    }

    /// Exact-match lookup by store id. First row wins when the extract
    /// contains duplicates (an upstream data-quality issue, not resolved
    /// here).
    pub fn store_position(&self, store_id: &str) -> Option<&StorePosition> {
        self.stores.iter().find(|s| s.store_id == store_id)
    }

    pub fn cluster_profile(&self, industry: &str, cluster_id: &str) -> Option<&ClusterProfile> {
        self.profile_keys
            .get(&(industry.to_string(), cluster_id.to_string()))
            .map(|&i| &self.profiles[i])
    }

    /// All segment profiles of one industry, in table order.
    pub fn cluster_profiles(&self, industry: &str) -> Vec<&ClusterProfile> {
        self.profiles
            .iter()
            .filter(|p| p.industry == industry)
            .collect()
    }

    /// Human label for a cluster; falls back to the raw id when the profile
    /// carries an empty name.
    pub fn cluster_label(&self, industry: &str, cluster_id: &str) -> String {
        match self.cluster_profile(industry, cluster_id) {
            Some(p) if !p.cluster_name.is_empty() => p.cluster_name.clone(),
            _ => cluster_id.to_string(),
        }
    }

    /// Stores of one industry that have usable coordinates, paired with
    /// their map points. This is the candidate set for all spatial queries.
    pub fn positioned_in_industry(&self, industry: &str) -> Vec<(&StorePosition, Point)> {
        self.stores
            .iter()
            .filter(|s| s.industry == industry)
            .filter_map(|s| s.point().map(|p| (s, p)))
            .collect()
    }

    pub fn stores(&self) -> &[StorePosition] {
        &self.stores
    }

    pub fn profiles(&self) -> &[ClusterProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(id: &str, industry: &str, pc1: Option<f64>, pc2: Option<f64>) -> StorePosition {
        StorePosition {
            store_id: id.to_string(),
            store_name: format!("store {id}"),
            industry: industry.to_string(),
            pc1,
            pc2,
            cluster_id: "0".to_string(),
        }
    }

    fn profile(industry: &str, cluster_id: &str) -> ClusterProfile {
        ClusterProfile {
            industry: industry.to_string(),
            cluster_id: cluster_id.to_string(),
            cluster_name: format!("cluster {cluster_id}"),
            store_count: 1,
            pc1_mean: 0.0,
            pc2_mean: 0.0,
            characteristics: String::new(),
        }
    }

    #[test]
    fn test_empty_stores_rejected() {
        let err = PositioningIndex::new(vec![], vec![profile("cafe", "0")]).unwrap_err();
        assert!(matches!(err, DomainError::DataLoad(_)));
    }

    #[test]
    fn test_empty_profiles_rejected() {
        let err =
            PositioningIndex::new(vec![store("s1", "cafe", Some(0.0), Some(0.0))], vec![])
                .unwrap_err();
        assert!(matches!(err, DomainError::DataLoad(_)));
    }

    #[test]
    fn test_dangling_cluster_reference_rejected() {
        let mut s = store("s1", "cafe", Some(0.0), Some(0.0));
        s.cluster_id = "9".to_string();
        let err = PositioningIndex::new(vec![s], vec![profile("cafe", "0")]).unwrap_err();
        match err {
            DomainError::DataLoad(msg) => assert!(msg.contains("s1")),
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_store_id_first_wins() {
        let mut a = store("s1", "cafe", Some(1.0), Some(1.0));
        a.store_name = "first".to_string();
        let mut b = store("s1", "cafe", Some(2.0), Some(2.0));
        b.store_name = "second".to_string();
        let idx = PositioningIndex::new(vec![a, b], vec![profile("cafe", "0")]).unwrap();
        assert_eq!(idx.store_position("s1").unwrap().store_name, "first");
    }

    #[test]
    fn test_unpositioned_store_lookup_but_not_spatial() {
        let idx = PositioningIndex::new(
            vec![
                store("s1", "cafe", Some(1.0), Some(1.0)),
                store("s2", "cafe", None, Some(3.0)),
            ],
            vec![profile("cafe", "0")],
        )
        .unwrap();
        assert!(idx.store_position("s2").is_some());
        let positioned = idx.positioned_in_industry("cafe");
        assert_eq!(positioned.len(), 1);
        assert_eq!(positioned[0].0.store_id, "s1");
    }

    #[test]
    fn test_cluster_label_falls_back_to_id() {
        let mut p = profile("cafe", "0");
        p.cluster_name = String::new();
        let idx =
            PositioningIndex::new(vec![store("s1", "cafe", Some(0.0), Some(0.0))], vec![p])
                .unwrap();
        assert_eq!(idx.cluster_label("cafe", "0"), "0");
        assert_eq!(idx.cluster_label("cafe", "missing"), "missing");
    }
}
