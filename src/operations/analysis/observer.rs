use crate::math::Point2;

/// Point sequences reported while analyzing a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The points handed to the pipeline.
    Input,
    /// The sequence after collinear runs were collapsed.
    Simplified,
    /// The detected inflection points.
    Inflections,
}

impl Stage {
    /// Lowercase name used as the `stage` field in log events.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stage::Input => "input",
            Stage::Simplified => "simplified",
            Stage::Inflections => "inflections",
        }
    }
}

/// Receives intermediate results of [`super::AnalyzeCurve`].
///
/// All methods default to doing nothing.
pub trait AnalysisObserver {
    /// Called with the point sequence produced by each [`Stage`].
    fn points(&mut self, _stage: Stage, _points: &[Point2]) {}

    /// `slopes[i]` belongs to the segment starting at `points[i]`.
    fn first_derivative(&mut self, _points: &[Point2], _slopes: &[f64]) {}

    /// `curvature[i]` compares the slopes of segments `i` and `i + 1`.
    fn second_derivative(&mut self, _points: &[Point2], _curvature: &[f64]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}

/// Observer that emits every stage as `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn points(&mut self, stage: Stage, points: &[Point2]) {
        tracing::debug!(stage = stage.name(), count = points.len(), "points");
        for p in points {
            tracing::debug!(stage = stage.name(), x = p.x, y = p.y);
        }
    }

    fn first_derivative(&mut self, points: &[Point2], slopes: &[f64]) {
        for (p, d) in points.iter().zip(slopes) {
            tracing::debug!("f'({}) = {}", p.x, d);
        }
    }

    fn second_derivative(&mut self, points: &[Point2], curvature: &[f64]) {
        for (p, d) in points.iter().zip(curvature) {
            tracing::debug!("f''({}) = {}", p.x, d);
        }
    }
}
