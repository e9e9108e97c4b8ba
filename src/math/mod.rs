pub mod bounds_2d;
pub mod derivative_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Discrete derivative values, one per interval between consecutive samples.
pub type DerivativeSeries = Vec<f64>;

/// Segments with `|dx|` below this are treated as vertical.
pub const VERTICAL_TOLERANCE: f64 = 1e-9;

/// Two slopes closer than this are considered equal.
pub const SLOPE_TOLERANCE: f64 = 1e-9;
