/// A 24-bit `0xRRGGBB` color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    /// Bits above the low 24 are dropped.
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    pub const fn hex(self) -> u32 {
        self.0
    }

    pub const fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb::from_hex(hex)
    }
}

/// Merges an RGB value and an opacity into an engine color.
///
/// Implementations must be deterministic and total over `alpha` in `[0, 1]`.
pub trait ColorPacker {
    type Color;

    fn pack(&self, rgb: Rgb, alpha: f32) -> Self::Color;
}

impl<K: ColorPacker + ?Sized> ColorPacker for &K {
    type Color = K::Color;

    fn pack(&self, rgb: Rgb, alpha: f32) -> Self::Color {
        (**self).pack(rgb, alpha)
    }
}

/// Maps a unit opacity onto an 8-bit alpha channel.
pub(crate) fn alpha_to_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}
