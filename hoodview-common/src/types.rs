#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::VariantNames;

use crate::error::CommonError;

/// Linear RGBA color, each component in `[0, 1]`
pub type RgbaColor = [f32; 4];

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SymbolShape {
    #[default]
    Circle,
    Square,
}

/// Parse a config string by its snake_case variant name. `all` lists the
/// variants in declaration order, parallel to `VARIANTS`.
fn parse_variant<T: VariantNames + Copy>(
    kind: &'static str,
    all: &[T],
    value: &str,
) -> Result<T, CommonError> {
    T::VARIANTS
        .iter()
        .position(|name| *name == value)
        .and_then(|i| all.get(i).copied())
        .ok_or_else(|| CommonError::UnknownVariant {
            kind,
            value: value.to_string(),
            expected: T::VARIANTS.join(", "),
        })
}

impl StrokeCap {
    const ALL: [StrokeCap; 3] = [StrokeCap::Butt, StrokeCap::Round, StrokeCap::Square];
}

impl FromStr for StrokeCap {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("stroke cap", &Self::ALL, s)
    }
}

impl SymbolShape {
    const ALL: [SymbolShape; 2] = [SymbolShape::Circle, SymbolShape::Square];
}

impl FromStr for SymbolShape {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("symbol shape", &Self::ALL, s)
    }
}
