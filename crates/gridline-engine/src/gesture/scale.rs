/// Wheel delta units per unit of raw scale.
pub const ZOOM_DIVISOR: f64 = 4000.0;

/// Divisor used while Alt is held; 2.5x finer than [`ZOOM_DIVISOR`].
pub const FINE_ZOOM_DIVISOR: f64 = 10000.0;

/// Maps a raw scale accumulator to a rendering scale factor.
///
/// `raw² + raw + 1` above zero, `exp(raw)` at or below it. Both branches are 1
/// at zero, so the mapping is continuous, strictly increasing and positive.
#[inline]
pub fn normalize_scale(raw: f64) -> f64 {
    if raw > 0.0 {
        raw * raw + raw + 1.0
    } else {
        raw.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_at_zero() {
        assert_eq!(normalize_scale(0.0), 1.0);
    }

    #[test]
    fn continuous_at_zero() {
        let eps = 1e-9;
        assert!((normalize_scale(eps) - 1.0).abs() < 1e-8);
        assert!((normalize_scale(-eps) - 1.0).abs() < 1e-8);
    }

    #[test]
    fn strictly_increasing_and_positive() {
        let mut prev = normalize_scale(-50.0);
        assert!(prev > 0.0);
        for i in -4999..=5000 {
            let raw = i as f64 / 100.0;
            let s = normalize_scale(raw);
            assert!(s > 0.0, "not positive at {raw}");
            assert!(s > prev, "not increasing at {raw}");
            prev = s;
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(normalize_scale(1.0), 3.0);
        assert_eq!(normalize_scale(2.0), 7.0);
        assert!((normalize_scale(-1.0) - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn alt_zoom_is_two_and_a_half_times_finer() {
        assert_eq!(FINE_ZOOM_DIVISOR / ZOOM_DIVISOR, 2.5);
    }
}
