//! Small helpers around [`csscolorparser::Color`], which is the RGBA type used
//! everywhere in settings and paths.
pub use csscolorparser::parse as parse_css_color;
pub use csscolorparser::Color;

/// Components are 0..1, same as the css parser's internal representation.
pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
    Color::new(r as _, g as _, b as _, a as _)
}

/// Gray level, alpha 1.
pub fn gray(level: f64) -> Color {
    rgba(level, level, level, 1.0)
}

pub fn white() -> Color {
    rgba(1.0, 1.0, 1.0, 1.0)
}

pub fn black() -> Color {
    rgba(0.0, 0.0, 0.0, 1.0)
}

pub fn transparent() -> Color {
    rgba(1.0, 1.0, 1.0, 0.0)
}

/// Same color, different alpha.
pub fn with_alpha(color: &Color, alpha: f64) -> Color {
    rgba(f64::from(color.r), f64::from(color.g), f64::from(color.b), alpha)
}

/// Multiply the rgb channels, keeping alpha. Used for flat shading.
pub fn scale_rgb(color: &Color, factor: f64) -> Color {
    rgba(
        f64::from(color.r) * factor,
        f64::from(color.g) * factor,
        f64::from(color.b) * factor,
        f64::from(color.a),
    )
}

pub fn alpha(color: &Color) -> f64 {
    f64::from(color.a)
}

/// `rgb(r, g, b)` with 0..255 channels, for svg attributes. Alpha travels separately
/// as an opacity attribute.
pub fn svg_rgb(color: &Color) -> String {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({},{},{})",
        channel(f64::from(color.r)),
        channel(f64::from(color.g)),
        channel(f64::from(color.b))
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_svg_rgb() {
        assert_eq!(svg_rgb(&rgba(1.0, 0.0, 0.5, 0.25)), "rgb(255,0,128)");
        assert_eq!(svg_rgb(&white()), "rgb(255,255,255)");
    }

    #[test]
    fn test_scale_keeps_alpha() {
        let c = scale_rgb(&rgba(1.0, 0.5, 0.25, 0.5), 0.5);
        assert!((f64::from(c.r) - 0.5).abs() < 1e-6);
        assert!((f64::from(c.g) - 0.25).abs() < 1e-6);
        assert!((alpha(&c) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse() {
        let c = parse_css_color("#ff0000").unwrap();
        assert_eq!(svg_rgb(&c), "rgb(255,0,0)");
    }
}
