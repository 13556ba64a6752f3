//! Confidence estimation for assessment results.
//!
//! The reported confidence is synthetic: a jittered percentage, not a
//! statistically derived one. Scoring itself stays deterministic — the
//! jitter is the single source of randomness in the system, so it lives
//! behind a trait and the RNG is injected. Production draws from the
//! thread RNG; tests pass a seeded `StdRng` or a fixed value.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Lower bound of the jittered confidence, as a fraction.
const CONFIDENCE_FLOOR: f64 = 0.80;

/// Width of the jitter band above the floor.
const CONFIDENCE_SPAN: f64 = 0.20;

/// Produces the confidence percentage reported with each assessment.
pub trait ConfidenceEstimator {
    fn estimate(&mut self) -> u8;
}

/// Uniform jitter in [80, 100]: `round((0.80 + U * 0.20) * 100)` with
/// U uniform in [0, 1).
pub struct JitterConfidence<R: Rng> {
    rng: R,
}

impl JitterConfidence<ThreadRng> {
    pub fn thread_rng() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> JitterConfidence<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ConfidenceEstimator for JitterConfidence<R> {
    fn estimate(&mut self) -> u8 {
        let u: f64 = self.rng.gen();
        ((CONFIDENCE_FLOOR + u * CONFIDENCE_SPAN) * 100.0).round() as u8
    }
}

/// Constant confidence, for deterministic assertions.
pub struct FixedConfidence(pub u8);

impl ConfidenceEstimator for FixedConfidence {
    fn estimate(&mut self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn jitter_stays_within_band() {
        let mut estimator = JitterConfidence::thread_rng();
        for _ in 0..1000 {
            let c = estimator.estimate();
            assert!((80..=100).contains(&c), "confidence {c} out of band");
        }
    }

    #[test]
    fn seeded_rng_reproduces_sequence() {
        let mut a = JitterConfidence::with_rng(StdRng::seed_from_u64(7));
        let mut b = JitterConfidence::with_rng(StdRng::seed_from_u64(7));
        let first: Vec<u8> = (0..32).map(|_| a.estimate()).collect();
        let second: Vec<u8> = (0..32).map(|_| b.estimate()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_confidence_passes_through() {
        let mut fixed = FixedConfidence(92);
        assert_eq!(fixed.estimate(), 92);
        assert_eq!(fixed.estimate(), 92);
    }
}
