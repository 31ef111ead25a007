//! Nearest-partial search between two frequency sets.

/// Starting "distance" for the scan; above any audible frequency.
pub const SENTINEL_DIFF_HZ: f64 = 22_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    /// |freq - other_hz|
    pub diff_hz: f64,
    /// The candidate closest to the query.
    pub other_hz: f64,
}

/// Find the candidate closest to `freq_hz`.
///
/// Candidates are scanned in order and only a strictly smaller difference
/// replaces the current best, so the earliest of several equidistant
/// candidates wins. If no candidate lies closer than [`SENTINEL_DIFF_HZ`]
/// (including an empty slice) the result is `(SENTINEL_DIFF_HZ, 0.0)`.
pub fn nearest_match(freq_hz: f64, candidates: &[f64]) -> MatchResult {
    let init = MatchResult {
        diff_hz: SENTINEL_DIFF_HZ,
        other_hz: 0.0,
    };
    candidates.iter().fold(init, |best, &other_hz| {
        let diff_hz = (freq_hz - other_hz).abs();
        if diff_hz < best.diff_hz {
            MatchResult { diff_hz, other_hz }
        } else {
            best
        }
    })
}
