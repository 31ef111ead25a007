//! Fixed harmonic frequency sets for the notes being compared.

/// A named note as an ordered list of partials: f0, 2·f0, 3·f0, ...
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencySet {
    pub name: &'static str,
    pub fundamental_hz: f64,
    freqs_hz: Vec<f64>,
}

impl FrequencySet {
    /// The first `count` integer harmonics of `fundamental_hz`.
    pub fn harmonics(name: &'static str, fundamental_hz: f64, count: usize) -> Self {
        let freqs_hz = (1..=count).map(|k| fundamental_hz * k as f64).collect();
        Self {
            name,
            fundamental_hz,
            freqs_hz,
        }
    }

    pub fn freqs_hz(&self) -> &[f64] {
        &self.freqs_hz
    }

    pub fn len(&self) -> usize {
        self.freqs_hz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs_hz.is_empty()
    }
}

pub fn a3() -> FrequencySet {
    FrequencySet::harmonics("A3", 220.0, 4)
}

pub fn a4() -> FrequencySet {
    FrequencySet::harmonics("A4", 440.0, 2)
}

pub fn e4() -> FrequencySet {
    FrequencySet::harmonics("E4", 329.6, 3)
}

pub fn b3() -> FrequencySet {
    FrequencySet::harmonics("B3", 246.9, 4)
}

pub fn a_sharp3() -> FrequencySet {
    FrequencySet::harmonics("A#3", 233.1, 4)
}

pub fn e_flat4() -> FrequencySet {
    FrequencySet::harmonics("Eb4", 311.1, 4)
}

/// Every predefined note, in declaration order.
pub fn catalog() -> Vec<FrequencySet> {
    vec![a3(), a4(), e4(), b3(), a_sharp3(), e_flat4()]
}

/// Case-insensitive lookup in [`catalog`].
pub fn by_name(name: &str) -> Option<FrequencySet> {
    catalog()
        .into_iter()
        .find(|set| set.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonics_are_integer_multiples() {
        let set = FrequencySet::harmonics("X", 110.0, 5);
        assert_eq!(set.freqs_hz(), &[110.0, 220.0, 330.0, 440.0, 550.0]);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(a3().freqs_hz(), &[220.0, 440.0, 660.0, 880.0]);
        assert_eq!(a4().freqs_hz(), &[440.0, 880.0]);
        assert_eq!(e4().len(), 3);
        for set in [b3(), a_sharp3(), e_flat4()] {
            assert_eq!(set.len(), 4, "{}", set.name);
        }
        assert_eq!(catalog().len(), 6);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(by_name("eb4"), Some(e_flat4()));
        assert_eq!(by_name("a#3").map(|s| s.fundamental_hz), Some(233.1));
        assert!(by_name("C4").is_none());
    }

    #[test]
    fn empty_set() {
        assert!(FrequencySet::harmonics("none", 100.0, 0).is_empty());
    }
}
