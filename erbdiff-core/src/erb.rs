//! Equivalent rectangular bandwidth.
//!
//! Glasberg & Moore: ERB(f) ≈ 24.7 * (4.37 * f_kHz + 1) [Hz], written here in
//! its linear form f / 9.2645 + 24.7 (24.7 * 4.37 / 1000 ≈ 1 / 9.2645).

const ERB_SLOPE_DIVISOR: f64 = 9.2645;
const ERB_MIN_HZ: f64 = 24.7;

/// ERB bandwidth in Hz at `f_hz`. Total over all inputs, strictly increasing.
#[inline]
pub fn erb_hz(f_hz: f64) -> f64 {
    f_hz / ERB_SLOPE_DIVISOR + ERB_MIN_HZ
}

/// `diff_hz` as a percentage of the ERB centred on `centre_hz`.
#[inline]
pub fn erb_percent(diff_hz: f64, centre_hz: f64) -> f64 {
    diff_hz / erb_hz(centre_hz) * 100.0
}
