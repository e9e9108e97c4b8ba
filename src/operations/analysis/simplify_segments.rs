use super::AnalysisParams;
use crate::math::derivative_2d::first_derivative_with;
use crate::math::Point2;

/// Reduces a sampled curve to its piecewise-linear shape.
///
/// Keeps the first point, every point where the slope changes, and the last
/// point of each maximal run of equal-slope segments. Interior points of a
/// run are dropped.
pub struct SimplifySegments<'a> {
    points: &'a [Point2],
    params: AnalysisParams,
}

impl<'a> SimplifySegments<'a> {
    /// Creates a new `SimplifySegments` operation with default tolerances.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            params: AnalysisParams::default(),
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the simplification.
    ///
    /// Fewer than 3 points are returned unchanged.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        if self.points.len() < 3 {
            return self.points.to_vec();
        }
        let slopes = first_derivative_with(self.points, self.params.vertical_tolerance);
        self.collapse_runs(&slopes)
    }

    /// Executes the simplification with a precomputed first derivative.
    ///
    /// `slopes` should be `first_derivative` of the points given to
    /// [`Self::new`]. If its length does not match, the slopes are recomputed.
    #[must_use]
    pub fn execute_with_slopes(&self, slopes: &[f64]) -> Vec<Point2> {
        if self.points.len() < 3 {
            return self.points.to_vec();
        }
        if slopes.len() != self.points.len() - 1 {
            return self.execute();
        }
        self.collapse_runs(slopes)
    }

    /// Requires `points.len() >= 3` and `slopes.len() == points.len() - 1`.
    fn collapse_runs(&self, slopes: &[f64]) -> Vec<Point2> {
        let points = self.points;
        let tol = self.params.slope_tolerance;
        // NaN (from two vertical segments) never compares below tolerance.
        let continues_run =
            |i: usize| i + 1 < slopes.len() && (slopes[i] - slopes[i + 1]).abs() < tol;

        let mut simplified = Vec::with_capacity(points.len());
        simplified.push(points[0]);

        let mut i = 0;
        while i < slopes.len() {
            while continues_run(i) {
                i += 1;
            }
            simplified.push(points[i + 1]);
            i += 1;
        }

        simplified
    }
}
