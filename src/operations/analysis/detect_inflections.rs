use super::AnalysisParams;
use crate::math::derivative_2d::{first_derivative_with, second_derivative};
use crate::math::Point2;

/// Finds the sampled points where a curve changes concavity.
///
/// A point `points[i + 1]` is an inflection when the second derivative
/// strictly flips sign between `i` and `i + 1` while the first derivative
/// keeps its sign over the same window. The second condition rules out local
/// extrema. A second derivative of exactly zero is never a flip.
pub struct DetectInflections<'a> {
    points: &'a [Point2],
    params: AnalysisParams,
}

impl<'a> DetectInflections<'a> {
    /// Creates a new `DetectInflections` operation with default tolerances.
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

    /// Executes the detection, returning inflection points in curve order.
    ///
    /// Fewer than 3 points yield no inflections.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        if self.points.len() < 3 {
            return Vec::new();
        }
        let d1 = first_derivative_with(self.points, self.params.vertical_tolerance);
        let d2 = second_derivative(&d1);
        self.scan(&d1, &d2)
    }

    /// Executes the detection with precomputed derivatives of the points.
    ///
    /// If `d1` or `d2` has the wrong length for the points given to
    /// [`Self::new`], both are recomputed.
    #[must_use]
    pub fn execute_with_derivatives(&self, d1: &[f64], d2: &[f64]) -> Vec<Point2> {
        let n = self.points.len();
        if n < 3 {
            return Vec::new();
        }
        if d1.len() != n - 1 || d2.len() != n - 2 {
            return self.execute();
        }
        self.scan(d1, d2)
    }

    /// Requires `d1.len() == points.len() - 1` and `d2.len() == points.len() - 2`.
    fn scan(&self, d1: &[f64], d2: &[f64]) -> Vec<Point2> {
        d2.windows(2)
            .enumerate()
            .filter(|&(i, w)| w[0] * w[1] < 0.0 && d1[i] * d1[i + 1] > 0.0)
            .map(|(i, _)| self.points[i + 1])
            .collect()
    }
}
