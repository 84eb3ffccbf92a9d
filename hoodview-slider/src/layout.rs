use hoodview_common::color::parse_css_color;
use hoodview_common::types::{RgbaColor, StrokeCap, SymbolShape};
use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Geometry and styling shared by every slider in a bank.
///
/// Colors are CSS strings so the layout can live in a JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SliderLayout {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub handle_radius: f32,
    /// Extra pointer slack around a handle when hit-testing
    pub hit_tolerance: f32,
    pub track_width: f32,
    pub track_color: String,
    /// One of `butt`, `round` or `square`
    pub track_cap: String,
    /// One of `circle` or `square`
    pub handle_shape: String,
    pub handle_fill: String,
    pub handle_stroke: String,
    pub handle_stroke_width: f32,
    /// Horizontal gap between a handle and its label
    pub label_offset: f32,
    pub label_color: String,
    pub font: String,
    pub font_size: f32,
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 40.0,
            margin_x: 10.0,
            handle_radius: 8.0,
            hit_tolerance: 2.0,
            track_width: 4.0,
            track_color: "#797979".to_string(),
            track_cap: "round".to_string(),
            handle_shape: "circle".to_string(),
            handle_fill: "white".to_string(),
            handle_stroke: "#BEBEBE".to_string(),
            handle_stroke_width: 1.0,
            label_offset: 5.0,
            label_color: "black".to_string(),
            font: "sans serif".to_string(),
            // 10pt
            font_size: 13.333,
        }
    }
}

impl SliderLayout {
    /// Vertical center of the track and handles
    pub fn track_y(&self) -> f32 {
        self.height / 4.0 + 5.0
    }

    pub fn label_y(&self) -> f32 {
        self.height / 4.0 + 25.0
    }

    pub fn pixel_range(&self) -> (f32, f32) {
        (self.margin_x, self.width - self.margin_x)
    }

    /// Check the geometry and resolve the CSS colors and mark shapes
    pub fn resolve(&self) -> Result<SliderStyle, SliderError> {
        let (start, end) = self.pixel_range();
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(SliderError::InvalidLayout {
                width: self.width,
                margin_x: self.margin_x,
            });
        }
        Ok(SliderStyle {
            track: parse_css_color(&self.track_color)?,
            track_cap: self.track_cap.parse()?,
            handle_shape: self.handle_shape.parse()?,
            handle_fill: parse_css_color(&self.handle_fill)?,
            handle_stroke: parse_css_color(&self.handle_stroke)?,
            label: parse_css_color(&self.label_color)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    pub track: RgbaColor,
    pub track_cap: StrokeCap,
    pub handle_shape: SymbolShape,
    pub handle_fill: RgbaColor,
    pub handle_stroke: RgbaColor,
    pub label: RgbaColor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoodview_common::error::CommonError;

    #[test]
    fn test_default_geometry() {
        let layout = SliderLayout::default();
        assert_eq!(layout.pixel_range(), (10.0, 240.0));
        assert_eq!(layout.track_y(), 15.0);
        assert_eq!(layout.label_y(), 35.0);
    }

    #[test]
    fn test_resolve_style() {
        let style = SliderLayout::default().resolve().unwrap();
        assert_eq!(style.handle_fill, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(style.label, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(style.track_cap, StrokeCap::Round);
        assert_eq!(style.handle_shape, SymbolShape::Circle);
    }

    #[test]
    fn test_resolve_rejects_unknown_cap() {
        let layout = SliderLayout {
            track_cap: "rounded".to_string(),
            ..Default::default()
        };
        assert_eq!(
            layout.resolve(),
            Err(SliderError::Style(CommonError::UnknownVariant {
                kind: "stroke cap",
                value: "rounded".to_string(),
                expected: "butt, round, square".to_string(),
            }))
        );
    }

    #[test]
    fn test_resolve_rejects_bad_color() {
        let layout = SliderLayout {
            track_color: "grayish".to_string(),
            ..Default::default()
        };
        assert_eq!(
            layout.resolve(),
            Err(SliderError::Style(CommonError::InvalidColor(
                "grayish".to_string()
            )))
        );
    }

    #[test]
    fn test_resolve_rejects_narrow_width() {
        let layout = SliderLayout {
            width: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            layout.resolve(),
            Err(SliderError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_partial_json() {
        let layout: SliderLayout = serde_json::from_str(r#"{"width": 300}"#).unwrap();
        assert_eq!(layout.width, 300.0);
        assert_eq!(layout.margin_x, 10.0);
    }

    #[test]
    fn test_json_mark_shapes() {
        let layout: SliderLayout =
            serde_json::from_str(r#"{"track_cap": "butt", "handle_shape": "square"}"#).unwrap();
        let style = layout.resolve().unwrap();
        assert_eq!(style.track_cap, StrokeCap::Butt);
        assert_eq!(style.handle_shape, SymbolShape::Square);

        let layout: SliderLayout = serde_json::from_str(r#"{"handle_shape": "star"}"#).unwrap();
        assert!(matches!(
            layout.resolve(),
            Err(SliderError::Style(CommonError::UnknownVariant { kind: "symbol shape", .. }))
        ));
    }
}
