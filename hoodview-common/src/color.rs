use css_color_parser::Color;

use crate::error::CommonError;
use crate::types::RgbaColor;

/// Parse a CSS color string (`"#797979"`, `"white"`, `"rgba(0,0,0,0.5)"`) into RGBA
pub fn parse_css_color(color: &str) -> Result<RgbaColor, CommonError> {
    match color.trim().parse::<Color>() {
        Ok(color) => Ok([
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]),
        Err(_) => Err(CommonError::InvalidColor(color.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c = parse_css_color("#797979").unwrap();
        assert!((c[0] - 121.0 / 255.0).abs() < 1e-6);
        assert_eq!(c[0], c[1]);
        assert_eq!(c[1], c[2]);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_css_color("white").unwrap(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_css_color("not-a-color"),
            Err(CommonError::InvalidColor("not-a-color".to_string()))
        );
    }
}
