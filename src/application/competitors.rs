//! Nearby-competitor search: which stores crowd a given store's position?

use std::sync::Arc;

use serde::Serialize;

use crate::domain::index::PositioningIndex;

/// Result cap, bounding response size for downstream prompt construction.
const MAX_COMPETITORS: usize = 10;

/// Another store within the query radius of the queried store's position.
#[derive(Debug, Clone, Serialize)]
pub struct Competitor {
    pub store_id: String,
    pub store_name: String,
    /// Human segment label, resolved from the cluster profile table.
    pub cluster_label: String,
    /// Euclidean distance in (PC1, PC2) space.
    pub distance: f64,
}

#[derive(Debug)]
pub struct CompetitorsUseCase {
    index: Arc<PositioningIndex>,
}

impl CompetitorsUseCase {
    pub fn new(index: Arc<PositioningIndex>) -> Self {
        Self { index }
    }

    /// Competitors within `radius` of the store, nearest first.
    ///
    /// An unknown store id, a store without coordinates, an empty industry
    /// partition, and `radius <= 0` all yield an empty list — a store with
    /// no resolvable neighborhood simply has no competitors to report.
    pub fn execute(&self, store_id: &str, radius: f64) -> Vec<Competitor> {
        if radius <= 0.0 {
            return Vec::new();
        }
        let queried = match self.index.store_position(store_id) {
            Some(s) => s,
            None => return Vec::new(),
        };
        let origin = match queried.point() {
            Some(p) => p,
            None => return Vec::new(),
        };

        let mut competitors: Vec<Competitor> = self
            .index
            .positioned_in_industry(&queried.industry)
            .into_iter()
            .filter(|(s, _)| s.store_id != store_id)
            .filter_map(|(s, p)| {
                let distance = origin.distance(&p);
                (distance <= radius).then(|| Competitor {
                    store_id: s.store_id.clone(),
                    store_name: s.store_name.clone(),
                    cluster_label: self.index.cluster_label(&s.industry, &s.cluster_id),
                    distance,
                })
            })
            .collect();

        // Nearest first; ties broken by store id for deterministic output.
        competitors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.store_id.cmp(&b.store_id))
        });
        competitors.truncate(MAX_COMPETITORS);
        competitors
    }
}
