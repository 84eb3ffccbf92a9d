use std::path::Path;

use hoodview_data::fields::{
    BATHROOM, BEDROOMS, FINISHED_SIZE, LOT_SIZE, RENT_AMOUNT, SALE_AMOUNT, TAX_ASSESSMENT,
    TOTAL_ROOMS,
};
use hoodview_slider::bank::{DegenerateDomainPolicy, FieldSlider};
use hoodview_slider::domain::MIN_SEPARATION;
use hoodview_slider::layout::SliderLayout;
use hoodview_slider::slider::MountPoint;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Vertical spacing between stacked sliders in the default layout
const SLIDER_ROW_HEIGHT: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderFieldConfig {
    pub field: String,
    pub mount: String,
    #[serde(default)]
    pub origin: [f32; 2],
}

impl SliderFieldConfig {
    pub fn new(field: &str, mount: &str, origin: [f32; 2]) -> Self {
        Self {
            field: field.to_string(),
            mount: mount.to_string(),
            origin,
        }
    }
}

impl From<&SliderFieldConfig> for FieldSlider {
    fn from(config: &SliderFieldConfig) -> Self {
        FieldSlider::new(
            config.field.clone(),
            MountPoint::new(config.mount.clone(), config.origin),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub width: f32,
    pub height: f32,
    pub slider_layout: SliderLayout,
    pub sliders: Vec<SliderFieldConfig>,
    pub degenerate_domain: DegenerateDomainPolicy,
    pub min_separation: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let sliders: Vec<_> = [
            (BEDROOMS, "bed-cont"),
            (BATHROOM, "bath-cont"),
            (FINISHED_SIZE, "size-cont"),
            (LOT_SIZE, "lot-size-cont"),
            (RENT_AMOUNT, "rent-cont"),
            (SALE_AMOUNT, "price-cont"),
            (TAX_ASSESSMENT, "tax-cont"),
            (TOTAL_ROOMS, "room-cont"),
        ]
        .into_iter()
        .enumerate()
        .map(|(row, (field, mount))| {
            SliderFieldConfig::new(field, mount, [0.0, row as f32 * SLIDER_ROW_HEIGHT])
        })
        .collect();

        let slider_layout = SliderLayout::default();
        Self {
            width: slider_layout.width,
            height: sliders.len() as f32 * SLIDER_ROW_HEIGHT,
            slider_layout,
            sliders,
            degenerate_domain: DegenerateDomainPolicy::default(),
            min_separation: MIN_SEPARATION,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn field_sliders(&self) -> Vec<FieldSlider> {
        self.sliders.iter().map(FieldSlider::from).collect()
    }
}
