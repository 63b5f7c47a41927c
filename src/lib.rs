//! Translate fill and line styles of a retained 2D scene model into paints
//! that a vello scene can record.

pub mod colors;
pub mod convert;
pub mod logging;
pub mod paint;
pub mod styles;
pub mod vello_backend;

pub mod prelude {
    pub use crate::colors::{ColorPacker, Rgb};
    pub use crate::convert::{resolve_cap, resolve_join, StyleConverter};
    pub use crate::logging::{init_logging, LoggingConfig};
    pub use crate::paint::PaintConfig;
    pub use crate::styles::{
        FillDescriptor, LineCap, LineDescriptor, LineJoin, PaintStyle, StrokeCap, StrokeJoin,
    };
    pub use crate::vello_backend::{vello_converter, VelloColorPacker, VelloPaint};
}
