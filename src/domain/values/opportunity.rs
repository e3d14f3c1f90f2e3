//! Opportunity scoring for white-space candidates.
//!
//! A candidate lattice point is scored as:
//!
//! `score = d_nearest * (1 / (1 + centrality))`
//!
//! where `d_nearest` is the distance to the closest existing store and
//! `centrality` is the point's distance from the industry's coordinate
//! centroid, measured in units of each axis's sample standard deviation.
//! The weighting rewards gaps that are both far from competitors and close
//! to the typical market position: a white space near the market's center is
//! a position a small business can plausibly occupy, while one at the
//! statistical periphery usually has no real market behind it.

use crate::domain::values::point::Point;

/// Centroid and per-axis spread of an industry's positioned stores.
#[derive(Debug, Clone, Copy)]
pub struct MapSpread {
    pub center: Point,
    /// Sample standard deviation of the x axis. Falls back to 1.0 when
    /// undefined (fewer than two points) or zero (collinear coordinates).
    pub scale_x: f64,
    /// Sample standard deviation of the y axis, same fallback.
    pub scale_y: f64,
}

impl MapSpread {
    /// `None` when there are no points to summarize.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

        Some(MapSpread {
            center: Point::new(mean_x, mean_y),
            scale_x: sample_std(points.iter().map(|p| p.x), mean_x, points.len()),
            scale_y: sample_std(points.iter().map(|p| p.y), mean_y, points.len()),
        })
    }

    /// Standardized distance from the market centroid.
    pub fn centrality(&self, point: &Point) -> f64 {
        let dx = (point.x - self.center.x) / self.scale_x;
        let dy = (point.y - self.center.y) / self.scale_y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn sample_std(values: impl Iterator<Item = f64>, mean: f64, n: usize) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let ss: f64 = values.map(|v| (v - mean) * (v - mean)).sum();
    let std = (ss / (n - 1) as f64).sqrt();
    if std.is_finite() && std > 0.0 {
        std
    } else {
        1.0
    }
}

/// Centrality-weighted opportunity score.
pub fn opportunity_score(distance_to_nearest: f64, centrality: f64) -> f64 {
    distance_to_nearest * (1.0 / (1.0 + centrality))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread(points: &[(f64, f64)]) -> MapSpread {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        MapSpread::from_points(&points).expect("non-empty")
    }

    #[test]
    fn test_centroid_and_std() {
        let s = spread(&[(-1.0, -2.0), (1.0, 2.0)]);
        assert_eq!(s.center, Point::new(0.0, 0.0));
        // sample std of {-1, 1} is sqrt(2), of {-2, 2} is 2*sqrt(2)
        assert!((s.scale_x - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((s.scale_y - 8.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_point_unit_scale() {
        let s = spread(&[(5.0, 5.0)]);
        assert_eq!(s.scale_x, 1.0);
        assert_eq!(s.scale_y, 1.0);
        assert_eq!(s.centrality(&Point::new(5.0, 5.0)), 0.0);
    }

    #[test]
    fn test_collinear_axis_unit_scale() {
        // All x identical: raw std is 0, scale falls back to 1.0
        let s = spread(&[(3.0, 0.0), (3.0, 2.0), (3.0, 4.0)]);
        assert_eq!(s.scale_x, 1.0);
        assert!(s.scale_y > 0.0);
    }

    #[test]
    fn test_empty_points_none() {
        assert!(MapSpread::from_points(&[]).is_none());
    }

    #[test]
    fn test_score_at_center_equals_distance() {
        assert_eq!(opportunity_score(1.4, 0.0), 1.4);
    }

    #[test]
    fn test_score_decreases_with_centrality() {
        let near = opportunity_score(1.0, 0.5);
        let far = opportunity_score(1.0, 3.0);
        assert!(near > far);
        assert!((near - 1.0 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_score_increases_with_distance() {
        assert!(opportunity_score(2.0, 1.0) > opportunity_score(1.0, 1.0));
    }
}
