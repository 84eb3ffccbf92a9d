use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Minimum distance, in domain units, kept between the two handles
pub const MIN_SEPARATION: f64 = 1.0;

/// The fixed closed interval `[lo, hi]` a slider can represent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Domain {
    lo: f64,
    hi: f64,
}

impl Domain {
    /// Fails with `InvalidDomain` unless both bounds are finite and `lo < hi`
    pub fn new(lo: f64, hi: f64) -> Result<Self, SliderError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(SliderError::InvalidDomain { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lo, self.hi)
    }

    /// Whether two handles `separation` apart fit in the domain and stay
    /// distinct at every magnitude the domain spans.
    ///
    /// Past the resolution of `f64` (around `1e16` for a separation of 1)
    /// `hi - separation` rounds back to `hi`, so the handles would collapse.
    pub fn supports_separation(&self, separation: f64) -> bool {
        self.width() >= separation
            && self.hi - separation < self.hi
            && self.lo + separation > self.lo
    }
}

impl TryFrom<(f64, f64)> for Domain {
    type Error = SliderError;

    fn try_from((lo, hi): (f64, f64)) -> Result<Self, Self::Error> {
        Domain::new(lo, hi)
    }
}

impl From<Domain> for (f64, f64) {
    fn from(domain: Domain) -> Self {
        (domain.lo, domain.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_reversed() {
        assert_eq!(
            Domain::new(10.0, 10.0),
            Err(SliderError::InvalidDomain { lo: 10.0, hi: 10.0 })
        );
        assert_eq!(
            Domain::new(10.0, 5.0),
            Err(SliderError::InvalidDomain { lo: 10.0, hi: 5.0 })
        );
        assert!(Domain::new(f64::NEG_INFINITY, 5.0).is_err());
        assert!(Domain::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_clamp() {
        let domain = Domain::new(0.0, 100.0).unwrap();
        assert_eq!(domain.clamp(-5.0), 0.0);
        assert_eq!(domain.clamp(150.0), 100.0);
        assert_eq!(domain.clamp(42.5), 42.5);
        assert!(domain.contains(100.0));
        assert_eq!(domain.width(), 100.0);
    }

    #[test]
    fn test_supports_separation() {
        assert!(Domain::new(0.0, 100.0).unwrap().supports_separation(1.0));
        assert!(Domain::new(0.0, 1.0).unwrap().supports_separation(1.0));
        assert!(!Domain::new(0.0, 0.5).unwrap().supports_separation(1.0));
        assert!(!Domain::new(0.0, 1e17).unwrap().supports_separation(1.0));
        assert!(!Domain::new(-1e17, 0.0).unwrap().supports_separation(1.0));
        assert!(Domain::new(0.0, 1e17).unwrap().supports_separation(1e3));
    }

    #[test]
    fn test_deserialize_validates() {
        let domain: Domain = serde_json::from_str("[5.0, 95.0]").unwrap();
        assert_eq!((domain.lo(), domain.hi()), (5.0, 95.0));
        assert!(serde_json::from_str::<Domain>("[10.0, 10.0]").is_err());
    }
}
