mod analyze_curve;
mod detect_inflections;
mod observer;
mod simplify_segments;

pub use analyze_curve::{point_label, AnalyzeCurve, CurveReport};
pub use detect_inflections::DetectInflections;
pub use observer::{AnalysisObserver, NoopObserver, Stage, TracingObserver};
pub use simplify_segments::SimplifySegments;

use crate::math::{Point2, SLOPE_TOLERANCE, VERTICAL_TOLERANCE};

/// Tolerances controlling curve analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    /// Segments with `|dx|` below this get an infinite slope.
    pub vertical_tolerance: f64,
    /// Adjacent slopes closer than this belong to the same collinear run.
    pub slope_tolerance: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            vertical_tolerance: VERTICAL_TOLERANCE,
            slope_tolerance: SLOPE_TOLERANCE,
        }
    }
}

/// Collapses collinear runs of `points` to their endpoints.
///
/// Shorthand for [`SimplifySegments`] with default tolerances.
#[must_use]
pub fn simplify(points: &[Point2]) -> Vec<Point2> {
    SimplifySegments::new(points).execute()
}

/// Returns the points of `points` where concavity flips without an extremum.
///
/// Shorthand for [`DetectInflections`] with default tolerances.
#[must_use]
pub fn detect_inflections(points: &[Point2]) -> Vec<Point2> {
    DetectInflections::new(points).execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points_match_operations() {
        let p: Vec<Point2> = [(0.0, 0.0), (1.0, 3.0), (2.0, 4.0), (3.0, 4.5), (4.0, 6.0)]
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect();
        assert_eq!(simplify(&p), SimplifySegments::new(&p).execute());
        assert_eq!(detect_inflections(&p), vec![Point2::new(2.0, 4.0)]);
    }

    #[test]
    fn entry_points_accept_empty_input() {
        assert!(simplify(&[]).is_empty());
        assert!(detect_inflections(&[]).is_empty());
    }
}
