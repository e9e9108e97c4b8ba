use super::{DerivativeSeries, Point2, VERTICAL_TOLERANCE};

/// Returns the slope `dy / dx` of every segment between consecutive points.
///
/// Segments with `|dx| < 1e-9` yield `+inf` whatever the sign of `dy`.
/// The result has `points.len() - 1` entries (none for fewer than 2 points).
#[must_use]
pub fn first_derivative(points: &[Point2]) -> DerivativeSeries {
    first_derivative_with(points, VERTICAL_TOLERANCE)
}

/// Same as [`first_derivative`] with an explicit vertical tolerance.
#[must_use]
pub fn first_derivative_with(points: &[Point2], vertical_tolerance: f64) -> DerivativeSeries {
    points
        .windows(2)
        .map(|w| segment_slope(&w[0], &w[1], vertical_tolerance))
        .collect()
}

/// Returns the difference between consecutive slopes.
///
/// This is index-spaced: the difference is not divided by any `dx`, so it
/// only approximates the true second derivative on evenly spaced samples.
#[must_use]
pub fn second_derivative(slopes: &[f64]) -> DerivativeSeries {
    slopes.windows(2).map(|w| w[1] - w[0]).collect()
}

fn segment_slope(a: &Point2, b: &Point2, vertical_tolerance: f64) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx.abs() < vertical_tolerance {
        f64::INFINITY
    } else {
        dy / dx
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    // ── first_derivative ──

    #[test]
    fn first_derivative_short_input_is_empty() {
        assert!(first_derivative(&[]).is_empty());
        assert!(first_derivative(&pts(&[(1.0, 2.0)])).is_empty());
    }

    #[test]
    fn first_derivative_slopes() {
        let d = first_derivative(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (4.0, 1.0)]));
        assert_eq!(d.len(), 3);
        assert_relative_eq!(d[0], 1.0);
        assert_relative_eq!(d[1], -1.0);
        assert_relative_eq!(d[2], 0.5);
    }

    #[test]
    fn vertical_segment_is_positive_infinity() {
        let up = first_derivative(&pts(&[(1.0, 0.0), (1.0, 5.0)]));
        assert_eq!(up.len(), 1);
        assert!(up[0].is_infinite() && up[0].is_sign_positive());

        // Sign of dy does not matter.
        let down = first_derivative(&pts(&[(1.0, 5.0), (1.0, 0.0)]));
        assert!(down[0].is_infinite() && down[0].is_sign_positive());
    }

    #[test]
    fn near_vertical_below_tolerance() {
        let d = first_derivative(&pts(&[(0.0, 0.0), (1e-10, 1.0), (1.0, 1.0)]));
        assert!(d[0].is_infinite());
        assert!(d[1].is_finite());
    }

    #[test]
    fn custom_vertical_tolerance() {
        let p = pts(&[(0.0, 0.0), (0.01, 1.0)]);
        assert!(first_derivative(&p)[0].is_finite());
        assert!(first_derivative_with(&p, 0.1)[0].is_infinite());
    }

    // ── second_derivative ──

    #[test]
    fn second_derivative_short_input_is_empty() {
        assert!(second_derivative(&[]).is_empty());
        assert!(second_derivative(&[3.0]).is_empty());
    }

    #[test]
    fn second_derivative_is_index_spaced() {
        // Irregular x spacing: differences are still plain slope deltas.
        let p = pts(&[(0.0, 0.0), (1.0, 1.0), (4.0, 10.0), (5.0, 10.0)]);
        let d1 = first_derivative(&p);
        let d2 = second_derivative(&d1);
        assert_eq!(d2.len(), p.len() - 2);
        assert_relative_eq!(d2[0], 2.0);
        assert_relative_eq!(d2[1], -3.0);
    }

    #[test]
    fn second_derivative_propagates_infinity() {
        let d2 = second_derivative(&[1.0, f64::INFINITY, f64::INFINITY]);
        assert!(d2[0].is_infinite());
        assert!(d2[1].is_nan());
    }
}
