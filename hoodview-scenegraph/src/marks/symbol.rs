use hoodview_common::types::{RgbaColor, SymbolShape};
use hoodview_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// Point symbols such as the draggable handles of a slider.
///
/// `size` is the area of the symbol's bounding square, so a circle's radius
/// is `sqrt(size) / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneSymbolMark {
    pub name: String,
    pub len: u32,
    pub shape: SymbolShape,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub size: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<RgbaColor>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: Option<f32>,
    pub zindex: Option<i32>,
}

impl SceneSymbolMark {
    pub fn size_for_radius(radius: f32) -> f32 {
        (2.0 * radius).powi(2)
    }

    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn size_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.size.as_iter(self.len as usize)
    }

    pub fn radius_iter(&self) -> Box<dyn Iterator<Item = f32> + '_> {
        Box::new(self.size_iter().map(|size| size.sqrt() / 2.0))
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.fill.as_iter(self.len as usize)
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.stroke.as_iter(self.len as usize)
    }
}

impl Default for SceneSymbolMark {
    fn default() -> Self {
        Self {
            name: "symbol_mark".to_string(),
            len: 1,
            shape: SymbolShape::Circle,
            x: ScalarOrArray::Scalar(0.0),
            y: ScalarOrArray::Scalar(0.0),
            size: ScalarOrArray::Scalar(32.0),
            fill: ScalarOrArray::Scalar([0.0, 0.0, 0.0, 0.0]),
            stroke: ScalarOrArray::Scalar([0.0, 0.0, 0.0, 0.0]),
            stroke_width: None,
            zindex: None,
        }
    }
}
