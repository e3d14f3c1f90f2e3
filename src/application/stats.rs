use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::index::PositioningIndex;

/// Shape of the loaded positioning map, for operational visibility.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapStats {
    pub store_count: usize,
    /// Stores with usable coordinates (participants in spatial queries).
    pub positioned_store_count: usize,
    pub industry_count: usize,
    pub cluster_count: usize,
    pub by_industry: Vec<(String, usize)>,
}

#[derive(Debug)]
pub struct StatsUseCase {
    index: Arc<PositioningIndex>,
}

impl StatsUseCase {
    pub fn new(index: Arc<PositioningIndex>) -> Self {
        Self { index }
    }

    pub fn stats(&self) -> MapStats {
        let mut by_industry: BTreeMap<String, usize> = BTreeMap::new();
        let mut positioned = 0usize;
        for s in self.index.stores() {
            *by_industry.entry(s.industry.clone()).or_insert(0) += 1;
            if s.point().is_some() {
                positioned += 1;
            }
        }

        MapStats {
            store_count: self.index.stores().len(),
            positioned_store_count: positioned,
            industry_count: by_industry.len(),
            cluster_count: self.index.profiles().len(),
            by_industry: by_industry.into_iter().collect(),
        }
    }
}
