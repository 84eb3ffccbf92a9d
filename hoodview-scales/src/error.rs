#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("Empty range: start ({start}) equals end ({end})")]
    EmptyRange { start: f64, end: f64 },

    #[error("Scale bound is not finite: {0}")]
    NonFiniteBound(f64),
}
