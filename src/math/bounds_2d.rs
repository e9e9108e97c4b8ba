use super::Point2;

/// Axis ranges covered by a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Computes the bounds of `points`, or `None` when empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_bounds() {
        assert!(Bounds2::from_points(&[]).is_none());
    }

    #[test]
    fn single_point_is_degenerate() {
        let b = Bounds2::from_points(&[Point2::new(2.0, -1.0)]).unwrap();
        assert_eq!(b.min, b.max);
        assert!(b.width().abs() < 1e-12);
    }

    #[test]
    fn bounds_cover_all_points() {
        let b = Bounds2::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, -2.0),
            Point2::new(-1.0, 4.0),
        ])
        .unwrap();
        assert_eq!(b.min, Point2::new(-1.0, -2.0));
        assert_eq!(b.max, Point2::new(3.0, 4.0));
        assert!((b.width() - 4.0).abs() < 1e-12);
        assert!((b.height() - 6.0).abs() < 1e-12);
    }
}
