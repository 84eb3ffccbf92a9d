use hoodview_scales::numeric::linear::{LinearNumericScale, LinearNumericScaleConfig};
use hoodview_scales::numeric::ContinuousNumericScale;

use crate::domain::Domain;
use crate::error::SliderError;

/// Linear conversion between domain values and horizontal pixel positions.
///
/// The mapping is unclamped in both directions: pointer positions past the
/// track produce values past the domain, and the slider clamps them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMapping {
    scale: LinearNumericScale,
}

impl ScaleMapping {
    pub fn new(domain: &Domain, pixel_range: (f32, f32)) -> Result<Self, SliderError> {
        let scale = LinearNumericScale::try_new(&LinearNumericScaleConfig {
            domain: (domain.lo(), domain.hi()),
            range: (pixel_range.0 as f64, pixel_range.1 as f64),
            ..Default::default()
        })?;
        Ok(Self { scale })
    }

    /// Domain value under the given pixel position
    pub fn value(&self, pixel: f64) -> f64 {
        self.scale.invert(pixel)
    }

    /// Pixel position of the given domain value
    pub fn pixel(&self, value: f64) -> f64 {
        self.scale.scale(value)
    }

    pub fn pixel_range(&self) -> (f64, f64) {
        self.scale.range()
    }
}
