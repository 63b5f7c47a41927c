use std::fmt;

use vello::kurbo::{Affine, Shape};
use vello::peniko::{Brush, Color, Fill};

use crate::colors::{alpha_to_u8, ColorPacker, Rgb};
use crate::convert::StyleConverter;
use crate::paint::PaintConfig;
use crate::styles::{PaintStyle, StrokeCap, StrokeJoin};

/// Packs colors into `peniko::Color` (straight alpha, 8 bits per channel).
#[derive(Debug, Clone, Copy, Default)]
pub struct VelloColorPacker;

impl ColorPacker for VelloColorPacker {
    type Color = Color;

    fn pack(&self, rgb: Rgb, alpha: f32) -> Color {
        let (r, g, b) = rgb.channels();
        Color::rgba8(r, g, b, alpha_to_u8(alpha))
    }
}

/// A style converter producing [`VelloPaint`]s.
pub fn vello_converter() -> StyleConverter<VelloColorPacker> {
    StyleConverter::new(VelloColorPacker)
}

/// A solid paint ready to be recorded into a `vello::Scene`.
///
/// Vello selects anti-aliasing per render pass (`AaConfig`), so the flag is
/// only recorded here for the render driver to read back.
#[derive(custom_debug::Debug, Clone)]
pub struct VelloPaint {
    anti_alias: bool,
    #[debug(with = fmt_color)]
    color: Color,
    style: PaintStyle,
    stroke: vello::kurbo::Stroke,
}

fn fmt_color(color: &Color, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
        f,
        "#{:02x}{:02x}{:02x}{:02x}",
        color.r, color.g, color.b, color.a
    )
}

impl Default for VelloPaint {
    fn default() -> Self {
        Self {
            anti_alias: false,
            color: Color::rgba8(0, 0, 0, 255),
            style: PaintStyle::Fill,
            stroke: vello::kurbo::Stroke {
                width: 0.0,
                join: StrokeJoin::default().into(),
                miter_limit: 4.0,
                start_cap: StrokeCap::default().into(),
                end_cap: StrokeCap::default().into(),
                ..Default::default()
            },
        }
    }
}

impl VelloPaint {
    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn style(&self) -> PaintStyle {
        self.style
    }

    /// Effective opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.color.a as f32 / 255.0
    }

    pub fn brush(&self) -> Brush {
        Brush::Solid(self.color)
    }

    /// Stroke geometry, `None` for fill paints.
    pub fn stroke(&self) -> Option<&vello::kurbo::Stroke> {
        match self.style {
            PaintStyle::Stroke => Some(&self.stroke),
            PaintStyle::Fill => None,
        }
    }

    /// Record `shape` into `scene` with this paint.
    pub fn draw(&self, scene: &mut vello::Scene, transform: Affine, shape: &impl Shape) {
        let brush = self.brush();
        match self.style {
            PaintStyle::Fill => {
                scene.fill(Fill::NonZero, transform, &brush, None, shape);
            }
            PaintStyle::Stroke => {
                scene.stroke(&self.stroke, transform, &brush, None, shape);
            }
        }
    }
}

impl PaintConfig for VelloPaint {
    type Color = Color;

    fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_style(&mut self, style: PaintStyle) {
        self.style = style;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke.width = width;
    }

    fn set_stroke_join(&mut self, join: StrokeJoin) {
        self.stroke.join = join.into();
    }

    fn set_stroke_cap(&mut self, cap: StrokeCap) {
        let cap = cap.into();
        self.stroke.start_cap = cap;
        self.stroke.end_cap = cap;
    }

    fn set_stroke_miter(&mut self, miter_limit: f64) {
        self.stroke.miter_limit = miter_limit;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.color.a = alpha_to_u8(alpha);
    }
}

// StrokeJoin
impl From<StrokeJoin> for vello::kurbo::Join {
    fn from(join: StrokeJoin) -> Self {
        match join {
            StrokeJoin::Miter => vello::kurbo::Join::Miter,
            StrokeJoin::Bevel => vello::kurbo::Join::Bevel,
            StrokeJoin::Round => vello::kurbo::Join::Round,
        }
    }
}

// StrokeCap
impl From<StrokeCap> for vello::kurbo::Cap {
    fn from(cap: StrokeCap) -> Self {
        match cap {
            StrokeCap::Butt => vello::kurbo::Cap::Butt,
            StrokeCap::Round => vello::kurbo::Cap::Round,
            StrokeCap::Square => vello::kurbo::Cap::Square,
        }
    }
}
