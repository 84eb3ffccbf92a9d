pub mod linear;

/// A scale mapping a continuous numeric domain onto a continuous numeric range
pub trait ContinuousNumericScale {
    fn domain(&self) -> (f64, f64);

    fn range(&self) -> (f64, f64);

    fn clamp(&self) -> bool;

    /// Map a domain value to the range
    fn scale(&self, value: f64) -> f64;

    /// Map a range value back to the domain
    fn invert(&self, value: f64) -> f64;

    fn scale_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    fn invert_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| self.invert(*v)).collect()
    }
}
