use super::colors::ColorPacker;
use super::paint::PaintConfig;
use super::styles::{
    FillDescriptor, LineCap, LineDescriptor, LineJoin, PaintStyle, StrokeCap, StrokeJoin,
};

/// Converts source fill and line styles into engine paints.
#[derive(Debug, Clone, Default)]
pub struct StyleConverter<K> {
    packer: K,
}

impl<K: ColorPacker> StyleConverter<K> {
    pub fn new(packer: K) -> Self {
        Self { packer }
    }

    pub fn packer(&self) -> &K {
        &self.packer
    }

    /// Build a fill paint. Invisible fills still produce a paint, with zero opacity.
    pub fn convert_fill<P>(&self, fill: &FillDescriptor) -> P
    where
        P: PaintConfig<Color = K::Color> + Default,
    {
        log::trace!("converting fill {:?}", fill);

        let mut paint = P::default();
        paint.set_anti_alias(true);
        paint.set_color(self.packer.pack(fill.color, fill.alpha));
        paint.set_style(PaintStyle::Fill);
        if !fill.visible {
            paint.set_alpha(0.0);
        }
        paint
    }

    /// Build a stroke paint. Width and miter limit are passed through unchecked.
    pub fn convert_stroke<P>(&self, line: &LineDescriptor) -> P
    where
        P: PaintConfig<Color = K::Color> + Default,
    {
        log::trace!("converting line {:?}", line);

        let mut paint = P::default();
        paint.set_anti_alias(true);
        paint.set_style(PaintStyle::Stroke);
        paint.set_stroke_width(line.width);
        paint.set_color(self.packer.pack(line.color, line.alpha));
        paint.set_stroke_join(resolve_join(&line.join));
        paint.set_stroke_cap(resolve_cap(&line.cap));
        paint.set_stroke_miter(line.miter_limit);
        if !line.visible {
            paint.set_alpha(0.0);
        }
        paint
    }
}

/// Unknown joins fall back to `Miter`.
pub fn resolve_join(join: &LineJoin) -> StrokeJoin {
    match join {
        LineJoin::Miter => StrokeJoin::Miter,
        LineJoin::Bevel => StrokeJoin::Bevel,
        LineJoin::Round => StrokeJoin::Round,
        LineJoin::Other(name) => {
            log::warn!("unrecognized line join {:?}, using miter", name);
            StrokeJoin::Miter
        }
    }
}

/// Unknown caps fall back to `Butt`.
pub fn resolve_cap(cap: &LineCap) -> StrokeCap {
    match cap {
        LineCap::Butt => StrokeCap::Butt,
        LineCap::Round => StrokeCap::Round,
        LineCap::Square => StrokeCap::Square,
        LineCap::Other(name) => {
            log::warn!("unrecognized line cap {:?}, using butt", name);
            StrokeCap::Butt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Rgb;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Packed(u32, f32);

    struct FakePacker;

    impl ColorPacker for FakePacker {
        type Color = Packed;

        fn pack(&self, rgb: Rgb, alpha: f32) -> Packed {
            Packed(rgb.hex(), alpha)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        AntiAlias(bool),
        Color(Packed),
        Style(PaintStyle),
        StrokeWidth(f64),
        StrokeJoin(StrokeJoin),
        StrokeCap(StrokeCap),
        StrokeMiter(f64),
        Alpha(f32),
    }

    #[derive(Debug, Default)]
    struct FakePaint {
        calls: Vec<Call>,
    }

    impl FakePaint {
        fn style(&self) -> Option<PaintStyle> {
            self.calls.iter().rev().find_map(|c| match c {
                Call::Style(s) => Some(*s),
                _ => None,
            })
        }

        fn anti_alias(&self) -> bool {
            self.calls.contains(&Call::AntiAlias(true))
        }

        fn forced_alpha(&self) -> Option<f32> {
            self.calls.iter().rev().find_map(|c| match c {
                Call::Alpha(a) => Some(*a),
                _ => None,
            })
        }

        fn join(&self) -> Option<StrokeJoin> {
            self.calls.iter().find_map(|c| match c {
                Call::StrokeJoin(j) => Some(*j),
                _ => None,
            })
        }

        fn cap(&self) -> Option<StrokeCap> {
            self.calls.iter().find_map(|c| match c {
                Call::StrokeCap(c) => Some(*c),
                _ => None,
            })
        }
    }

    impl PaintConfig for FakePaint {
        type Color = Packed;

        fn set_anti_alias(&mut self, anti_alias: bool) {
            self.calls.push(Call::AntiAlias(anti_alias));
        }
        fn set_color(&mut self, color: Packed) {
            self.calls.push(Call::Color(color));
        }
        fn set_style(&mut self, style: PaintStyle) {
            self.calls.push(Call::Style(style));
        }
        fn set_stroke_width(&mut self, width: f64) {
            self.calls.push(Call::StrokeWidth(width));
        }
        fn set_stroke_join(&mut self, join: StrokeJoin) {
            self.calls.push(Call::StrokeJoin(join));
        }
        fn set_stroke_cap(&mut self, cap: StrokeCap) {
            self.calls.push(Call::StrokeCap(cap));
        }
        fn set_stroke_miter(&mut self, miter_limit: f64) {
            self.calls.push(Call::StrokeMiter(miter_limit));
        }
        fn set_alpha(&mut self, alpha: f32) {
            self.calls.push(Call::Alpha(alpha));
        }
    }

    fn converter() -> StyleConverter<FakePacker> {
        StyleConverter::new(FakePacker)
    }

    #[test]
    fn visible_fill() {
        let fill = FillDescriptor::new(Rgb::from_hex(0xFF0000), 0.5);
        let paint: FakePaint = converter().convert_fill(&fill);

        assert_eq!(
            paint.calls,
            vec![
                Call::AntiAlias(true),
                Call::Color(Packed(0xFF0000, 0.5)),
                Call::Style(PaintStyle::Fill),
            ]
        );
        assert_eq!(paint.forced_alpha(), None);
    }

    #[test]
    fn hidden_fill_forces_zero_alpha() {
        let fill = FillDescriptor {
            color: Rgb::from_hex(0x00FF00),
            alpha: 1.0,
            visible: false,
        };
        let paint: FakePaint = converter().convert_fill(&fill);

        assert_eq!(paint.style(), Some(PaintStyle::Fill));
        assert!(paint.anti_alias());
        assert_eq!(paint.calls.last(), Some(&Call::Alpha(0.0)));
    }

    #[test]
    fn stroke_setter_sequence() {
        let line = LineDescriptor::new(2.0, Rgb::from_hex(0x0000FF), 1.0)
            .with_join("round")
            .with_cap("square")
            .with_miter_limit(4.0);
        let paint: FakePaint = converter().convert_stroke(&line);

        assert_eq!(
            paint.calls,
            vec![
                Call::AntiAlias(true),
                Call::Style(PaintStyle::Stroke),
                Call::StrokeWidth(2.0),
                Call::Color(Packed(0x0000FF, 1.0)),
                Call::StrokeJoin(StrokeJoin::Round),
                Call::StrokeCap(StrokeCap::Square),
                Call::StrokeMiter(4.0),
            ]
        );
    }

    #[test]
    fn hidden_stroke_forces_zero_alpha() {
        let line = LineDescriptor::new(1.0, Rgb::WHITE, 0.8).hidden();
        let paint: FakePaint = converter().convert_stroke(&line);

        assert_eq!(paint.style(), Some(PaintStyle::Stroke));
        assert_eq!(paint.forced_alpha(), Some(0.0));
    }

    #[test]
    fn width_and_miter_pass_through() {
        for (width, miter) in [(0.0, 0.0), (-3.5, 1.0), (123.25, -2.0)] {
            let line = LineDescriptor::new(width, Rgb::BLACK, 1.0).with_miter_limit(miter);
            let paint: FakePaint = converter().convert_stroke(&line);
            assert!(paint.calls.contains(&Call::StrokeWidth(width)));
            assert!(paint.calls.contains(&Call::StrokeMiter(miter)));
        }
    }

    #[test]
    fn unknown_join_and_cap_fall_back() {
        let line = LineDescriptor::new(1.0, Rgb::BLACK, 1.0)
            .with_join("unknown")
            .with_cap("pointy");
        let paint: FakePaint = converter().convert_stroke(&line);

        assert_eq!(paint.join(), Some(StrokeJoin::Miter));
        assert_eq!(paint.cap(), Some(StrokeCap::Butt));
    }

    #[test]
    fn join_table() {
        assert_eq!(resolve_join(&LineJoin::Miter), StrokeJoin::Miter);
        assert_eq!(resolve_join(&LineJoin::Bevel), StrokeJoin::Bevel);
        assert_eq!(resolve_join(&LineJoin::Round), StrokeJoin::Round);
        assert_eq!(resolve_join(&LineJoin::from("MITER")), StrokeJoin::Miter);
    }

    #[test]
    fn cap_table() {
        assert_eq!(resolve_cap(&LineCap::Butt), StrokeCap::Butt);
        assert_eq!(resolve_cap(&LineCap::Round), StrokeCap::Round);
        assert_eq!(resolve_cap(&LineCap::Square), StrokeCap::Square);
        assert_eq!(resolve_cap(&LineCap::from("")), StrokeCap::Butt);
    }

    #[test]
    fn paints_are_independent() {
        let conv = converter();
        let fill = FillDescriptor::new(Rgb::WHITE, 1.0);
        let mut a: FakePaint = conv.convert_fill(&fill);
        let b: FakePaint = conv.convert_fill(&fill);

        a.set_alpha(0.0);
        assert_eq!(b.forced_alpha(), None);
        assert_ne!(a.calls, b.calls);
    }
}
