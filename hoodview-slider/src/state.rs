use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// The current `(min, max)` pair of a slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderState {
    pub min: f64,
    pub max: f64,
}

impl SliderState {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// State spanning the whole domain
    pub fn full(domain: &Domain) -> Self {
        Self {
            min: domain.lo(),
            max: domain.hi(),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Restore `lo <= min`, `max <= hi` and `max - min >= separation`.
    ///
    /// Each bound is first clamped independently; if they still collide the
    /// min bound is kept and max is pushed up, unless that would leave the
    /// domain, in which case max sits at `hi` and min is pushed down.
    /// NaN bounds collapse onto the domain edges.
    ///
    /// The separation holds exactly as computed in `f64` provided the domain
    /// [supports](Domain::supports_separation) it.
    pub fn normalized(self, domain: &Domain, separation: f64) -> Self {
        let (lo, hi) = (domain.lo(), domain.hi());
        let mut min = self.min.min(hi - separation).max(lo);
        let mut max = self.max.max(lo + separation).min(hi);

        if max - min < separation {
            if min + separation <= hi {
                max = min + separation;
            } else {
                max = hi;
                min = hi - separation;
            }
        }

        // `x - separation` may round up by half an ulp; step apart one ulp
        // at a time, which ends at `[lo, hi]` at the latest
        while max - min < separation && min > lo {
            min = min.next_down();
        }
        while max - min < separation && max < hi {
            max = max.next_up();
        }
        Self { min, max }
    }

    pub fn is_within(&self, domain: &Domain) -> bool {
        domain.contains(self.min) && domain.contains(self.max) && self.min < self.max
    }
}
