extern crate style_bridge;

use anyhow::{ensure, Result};

use style_bridge::prelude::*;
use vello::kurbo::{Affine, Circle, Rect};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let converter = vello_converter();
    let mut scene = vello::Scene::new();

    let fill = FillDescriptor::new(Rgb::from_hex(0xFF0000), 0.5);
    let line = LineDescriptor::new(2.0, Rgb::from_hex(0x0000FF), 1.0)
        .with_join("round")
        .with_cap("square")
        .with_miter_limit(4.0);
    // upstream typo: resolves to the default join
    let sloppy = LineDescriptor::new(1.0, Rgb::BLACK, 1.0).with_join("rund");

    let fill_paint: VelloPaint = converter.convert_fill(&fill);
    let line_paint: VelloPaint = converter.convert_stroke(&line);
    let sloppy_paint: VelloPaint = converter.convert_stroke(&sloppy);

    let rect = Rect::new(-50.0, -50.0, 50.0, 50.0);
    let transform = Affine::translate((200.0, 150.0));
    fill_paint.draw(&mut scene, transform, &rect);
    line_paint.draw(&mut scene, transform, &rect);
    sloppy_paint.draw(&mut scene, transform, &Circle::new((0.0, 0.0), 30.0));

    for paint in [&fill_paint, &line_paint, &sloppy_paint] {
        log::info!("{:?}", paint);
    }

    ensure!(!scene.encoding().is_empty(), "nothing was recorded");
    Ok(())
}
