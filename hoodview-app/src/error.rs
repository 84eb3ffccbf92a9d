use hoodview_slider::error::SliderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to read dashboard config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Slider(#[from] SliderError),
}
