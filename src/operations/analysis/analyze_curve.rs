use super::{AnalysisObserver, AnalysisParams, DetectInflections, SimplifySegments, Stage};
use crate::math::bounds_2d::Bounds2;
use crate::math::derivative_2d::{first_derivative_with, second_derivative};
use crate::math::Point2;

/// Result of running the full analysis on one curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveReport {
    /// The points as given.
    pub input: Vec<Point2>,
    /// The curve with collinear runs collapsed.
    pub simplified: Vec<Point2>,
    /// Inflection points of the simplified curve.
    pub inflections: Vec<Point2>,
}

impl CurveReport {
    /// Axis ranges of the simplified curve, or `None` if it is empty.
    #[must_use]
    pub fn plot_bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(&self.simplified)
    }
}

/// Formats a point as `(x, y)` for annotating a marker.
#[must_use]
pub fn point_label(p: &Point2) -> String {
    format!("({}, {})", p.x, p.y)
}

/// Simplifies a curve, then finds the inflections of the simplified curve.
///
/// Derivatives of the simplified curve are computed once and shared between
/// detection and the observer.
pub struct AnalyzeCurve<'a> {
    points: &'a [Point2],
    params: AnalysisParams,
    raw_inflections: bool,
}

impl<'a> AnalyzeCurve<'a> {
    /// Creates a new `AnalyzeCurve` operation with default tolerances.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            params: AnalysisParams::default(),
            raw_inflections: false,
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.params = params;
        self
    }

    /// Detect inflections on the input points instead of the simplified ones.
    #[must_use]
    pub fn raw_inflections(mut self, raw: bool) -> Self {
        self.raw_inflections = raw;
        self
    }

    /// Executes the analysis, reporting each stage to `observer`.
    pub fn execute(&self, observer: &mut dyn AnalysisObserver) -> CurveReport {
        observer.points(Stage::Input, self.points);

        let simplified = SimplifySegments::new(self.points)
            .with_params(self.params)
            .execute();
        observer.points(Stage::Simplified, &simplified);

        let target: &[Point2] = if self.raw_inflections {
            self.points
        } else {
            &simplified
        };
        let d1 = first_derivative_with(target, self.params.vertical_tolerance);
        let d2 = second_derivative(&d1);
        observer.first_derivative(target, &d1);
        observer.second_derivative(target, &d2);

        let inflections = DetectInflections::new(target)
            .with_params(self.params)
            .execute_with_derivatives(&d1, &d2);
        observer.points(Stage::Inflections, &inflections);

        CurveReport {
            input: self.points.to_vec(),
            simplified,
            inflections,
        }
    }
}
