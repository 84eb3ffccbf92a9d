use hoodview_common::error::CommonError;
use hoodview_scales::error::ScaleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("Invalid slider domain [{lo}, {hi}]")]
    InvalidDomain { lo: f64, hi: f64 },

    #[error("Field `{field}` has no numeric values")]
    EmptyExtent { field: String },

    #[error("Handle separation must be finite and positive, got {0}")]
    InvalidSeparation(f64),

    #[error("Slider width {width} leaves no track inside horizontal margins of {margin_x}")]
    InvalidLayout { width: f32, margin_x: f32 },

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Style(#[from] CommonError),
}
