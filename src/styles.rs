use super::colors::Rgb;

/// Fill appearance as produced by the upstream scene model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillDescriptor {
    pub color: Rgb,
    pub alpha: f32,
    pub visible: bool,
}

impl FillDescriptor {
    pub fn new(color: Rgb, alpha: f32) -> Self {
        Self {
            color,
            alpha,
            visible: true,
        }
    }
}

/// Line (stroke) appearance as produced by the upstream scene model.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDescriptor {
    pub color: Rgb,
    pub alpha: f32,
    pub width: f64,
    pub join: LineJoin,
    pub cap: LineCap,
    pub miter_limit: f64,
    pub visible: bool,
}

impl LineDescriptor {
    pub fn new(width: f64, color: Rgb, alpha: f32) -> Self {
        Self {
            color,
            alpha,
            width,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
            miter_limit: 10.0,
            visible: true,
        }
    }

    pub fn with_join(mut self, join: impl Into<LineJoin>) -> Self {
        self.join = join.into();
        self
    }

    pub fn with_cap(mut self, cap: impl Into<LineCap>) -> Self {
        self.cap = cap.into();
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Join names of the source vocabulary.
///
/// Upstream producers hand these over as strings, so anything that is not one
/// of the known names is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Bevel,
    Round,
    Other(String),
}

impl LineJoin {
    pub fn from_name(name: &str) -> Self {
        match name {
            "miter" => LineJoin::Miter,
            "bevel" => LineJoin::Bevel,
            "round" => LineJoin::Round,
            other => LineJoin::Other(other.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Bevel => "bevel",
            LineJoin::Round => "round",
            LineJoin::Other(name) => name,
        }
    }
}

impl From<&str> for LineJoin {
    fn from(name: &str) -> Self {
        LineJoin::from_name(name)
    }
}

/// Cap names of the source vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
    Other(String),
}

impl LineCap {
    pub fn from_name(name: &str) -> Self {
        match name {
            "butt" => LineCap::Butt,
            "round" => LineCap::Round,
            "square" => LineCap::Square,
            other => LineCap::Other(other.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
            LineCap::Other(name) => name,
        }
    }
}

impl From<&str> for LineCap {
    fn from(name: &str) -> Self {
        LineCap::from_name(name)
    }
}

// Target-side vocabulary, shared by every paint backend.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}
