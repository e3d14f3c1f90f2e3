use crate::domain::values::point::Point;
use serde::{Deserialize, Serialize};

/// One store's position on its industry's (PC1, PC2) map.
///
/// Coordinates are optional: the positioning extract sometimes lacks them for
/// a store. Such rows stay visible to identity lookups but never participate
/// in spatial queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePosition {
    pub store_id: String,
    pub store_name: String,
    pub industry: String,
    pub pc1: Option<f64>,
    pub pc2: Option<f64>,
    pub cluster_id: String,
}

impl StorePosition {
    /// The store's map coordinates, when both are present.
    pub fn point(&self) -> Option<Point> {
        match (self.pc1, self.pc2) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }
}
