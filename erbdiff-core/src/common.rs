/// Arithmetic mean of two frequencies (Hz).
#[inline]
pub fn midpoint_hz(f1: f64, f2: f64) -> f64 {
    (f1 + f2) / 2.0
}

/// Cents difference between two positive frequencies.
#[inline]
pub fn cents_diff(f1: f64, f2: f64) -> f64 {
    if f1 <= 0.0 || f2 <= 0.0 {
        return f64::INFINITY;
    }
    1200.0 * (f2 / f1).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_symmetric() {
        assert_eq!(midpoint_hz(220.0, 440.0), 330.0);
        assert_eq!(midpoint_hz(440.0, 220.0), 330.0);
    }

    #[test]
    fn octave_is_1200_cents() {
        assert!((cents_diff(220.0, 440.0) - 1200.0).abs() < 1e-9);
        assert!((cents_diff(440.0, 220.0) + 1200.0).abs() < 1e-9);
        assert!(cents_diff(0.0, 440.0).is_infinite());
    }
}
