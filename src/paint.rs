use super::styles::{PaintStyle, StrokeCap, StrokeJoin};

/// The paint setters the style converters rely on.
///
/// A paint is allocated through `Default` and handed to the caller once
/// configured; implementations must not share state between instances.
pub trait PaintConfig {
    type Color;

    fn set_anti_alias(&mut self, anti_alias: bool);
    fn set_color(&mut self, color: Self::Color);
    fn set_style(&mut self, style: PaintStyle);
    fn set_stroke_width(&mut self, width: f64);
    fn set_stroke_join(&mut self, join: StrokeJoin);
    fn set_stroke_cap(&mut self, cap: StrokeCap);
    fn set_stroke_miter(&mut self, miter_limit: f64);
    /// Overrides the opacity implied by the current color.
    fn set_alpha(&mut self, alpha: f32);
}
