use crate::domain::values::point::Point;
use serde::{Deserialize, Serialize};

/// Pre-aggregated summary of one K-Means segment within an industry.
///
/// `pc1_mean`/`pc2_mean` are the centroid of the member stores, supplied by
/// the upstream clustering pipeline and trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterProfile {
    pub industry: String,
    pub cluster_id: String,
    pub cluster_name: String,
    pub store_count: usize,
    pub pc1_mean: f64,
    pub pc2_mean: f64,
    pub characteristics: String,
}

impl ClusterProfile {
    pub fn centroid(&self) -> Point {
        Point::new(self.pc1_mean, self.pc2_mean)
    }
}
