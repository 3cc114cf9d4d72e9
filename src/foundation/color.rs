/// Packed 32-bit RGBA color, red in the most significant byte and alpha in the least.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self(0x0000_00FF);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Compose a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | a as u32)
    }

    /// Channels in memory order `[r, g, b, a]`.
    pub const fn to_rgba8(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const fn from_rgba8(px: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(px))
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(px: [u8; 4]) -> Self {
        Self::from_rgba8(px)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        c.to_rgba8()
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(px: image::Rgba<u8>) -> Self {
        Self::from_rgba8(px.0)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(c: Rgba) -> Self {
        image::Rgba(c.to_rgba8())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
