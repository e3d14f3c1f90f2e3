//! White-space detection: grid search over an industry's positioning map for
//! unoccupied regions worth recommending.
//!
//! The lattice covers the bounding box of the industry's positioned stores.
//! A lattice point survives when its nearest store is at least `min_distance`
//! away; survivors are ranked by the centrality-weighted opportunity score
//! (see `domain::values::opportunity`) and the top 10 are returned. A
//! saturated market producing zero candidates is a legitimate outcome, not a
//! fault — callers fall back to presenting the current position only.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::index::PositioningIndex;
use crate::domain::values::grid::linspace;
use crate::domain::values::opportunity::{opportunity_score, MapSpread};
use crate::domain::values::point::Point;

const MAX_CANDIDATES: usize = 10;

/// An unoccupied map position and how attractive it looks.
#[derive(Debug, Clone, Serialize)]
pub struct WhiteSpaceCandidate {
    pub pc1: f64,
    pub pc2: f64,
    pub distance_to_nearest_store: f64,
    pub opportunity_score: f64,
}

/// Result of one grid scan.
#[derive(Debug, Serialize)]
pub struct WhiteSpaceScan {
    pub analyzed_at: DateTime<Utc>,
    pub industry: String,
    /// Positioned stores the scan measured distances against.
    pub stores_considered: usize,
    pub grid_resolution: usize,
    pub min_distance: f64,
    pub candidates: Vec<WhiteSpaceCandidate>,
}

#[derive(Debug)]
pub struct WhiteSpaceUseCase {
    index: Arc<PositioningIndex>,
}

impl WhiteSpaceUseCase {
    pub fn new(index: Arc<PositioningIndex>) -> Self {
        Self { index }
    }

    pub fn execute(
        &self,
        industry: &str,
        grid_resolution: usize,
        min_distance: f64,
    ) -> WhiteSpaceScan {
        let stores = self.index.positioned_in_industry(industry);
        let points: Vec<Point> = stores.iter().map(|&(_, p)| p).collect();

        let candidates = find_white_spaces(&points, grid_resolution, min_distance);

        WhiteSpaceScan {
            analyzed_at: Utc::now(),
            industry: industry.to_string(),
            stores_considered: points.len(),
            grid_resolution,
            min_distance,
            candidates,
        }
    }
}

/// Core grid search over one industry partition.
fn find_white_spaces(
    stores: &[Point],
    grid_resolution: usize,
    min_distance: f64,
) -> Vec<WhiteSpaceCandidate> {
    let spread = match MapSpread::from_points(stores) {
        Some(s) => s,
        None => return Vec::new(),
    };

    let (mut pc1_min, mut pc1_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut pc2_min, mut pc2_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in stores {
        pc1_min = pc1_min.min(p.x);
        pc1_max = pc1_max.max(p.x);
        pc2_min = pc2_min.min(p.y);
        pc2_max = pc2_max.max(p.y);
    }

    let pc1_grid = linspace(pc1_min, pc1_max, grid_resolution);
    let pc2_grid = linspace(pc2_min, pc2_max, grid_resolution);

    let mut candidates = Vec::new();
    for &pc1 in &pc1_grid {
        for &pc2 in &pc2_grid {
            let point = Point::new(pc1, pc2);
            let nearest = stores
                .iter()
                .map(|s| point.distance(s))
                .fold(f64::INFINITY, f64::min);

            if nearest >= min_distance {
                candidates.push(WhiteSpaceCandidate {
                    pc1,
                    pc2,
                    distance_to_nearest_store: nearest,
                    opportunity_score: opportunity_score(nearest, spread.centrality(&point)),
                });
            }
        }
    }

    // Best first; coordinate tie-break keeps repeated scans bit-identical.
    candidates.sort_by(|a, b| {
        b.opportunity_score
            .partial_cmp(&a.opportunity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.pc1
                    .partial_cmp(&b.pc1)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| {
                a.pc2
                    .partial_cmp(&b.pc2)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    candidates.truncate(MAX_CANDIDATES);
    candidates
}
