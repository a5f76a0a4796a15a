//! RGBA pixel color with transparency-aware comparison
//!
//! Every fully-transparent color compares equal to every other one, whatever
//! its RGB payload. Invisible pixels carry no edge information, so the scaler
//! must never see a boundary between two of them.

use image::Rgba;

/// A 32-bit RGBA color, one byte per channel.
///
/// Equality is *not* structural: two colors are equal when all four channels
/// match, or when both have `a == 0`. The relation is still an equivalence,
/// so `Eq` holds. There is no `Hash` impl: a structural hash would disagree
/// with `eq` on transparent colors.
#[derive(Debug, Clone, Copy)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelColor {
    /// Fully transparent black.
    pub const TRANSPARENT: PixelColor = PixelColor::new(0, 0, 0, 0);

    /// Opaque black, the value of window slots that have not been read yet.
    pub const OPAQUE_BLACK: PixelColor = PixelColor::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack from `[r, g, b, a]` byte order.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Pack into `[r, g, b, a]` byte order.
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Unpack from a word laid out as `r | g << 8 | b << 16 | a << 24`.
    pub const fn from_u32(word: u32) -> Self {
        Self::from_bytes(word.to_le_bytes())
    }

    /// Pack into a word laid out as `r | g << 8 | b << 16 | a << 24`.
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.to_bytes())
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Manhattan distance over the four channels, or 0 for equal colors.
    ///
    /// Two transparent colors are at distance 0 even when their RGB differs.
    pub fn distance(self, other: PixelColor) -> u32 {
        if self == other {
            return 0;
        }
        self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
            + self.r.abs_diff(other.r) as u32
            + self.a.abs_diff(other.a) as u32
    }
}

impl Default for PixelColor {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

impl PartialEq for PixelColor {
    fn eq(&self, other: &Self) -> bool {
        self.to_u32() == other.to_u32() || (self.a | other.a) == 0
    }
}

impl Eq for PixelColor {}

impl From<Rgba<u8>> for PixelColor {
    fn from(px: Rgba<u8>) -> Self {
        Self::from_bytes(px.0)
    }
}

impl From<PixelColor> for Rgba<u8> {
    fn from(color: PixelColor) -> Self {
        Rgba(color.to_bytes())
    }
}

impl std::fmt::Display for PixelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_colors_are_equal() {
        let red = PixelColor::new(255, 0, 0, 0);
        let blue = PixelColor::new(0, 0, 255, 0);
        assert_eq!(red, blue);
        assert_eq!(red, PixelColor::TRANSPARENT);
        assert!(red.is_transparent() && blue.is_transparent());
    }

    #[test]
    fn test_alpha_difference_breaks_equality() {
        let faint = PixelColor::new(255, 0, 0, 1);
        let gone = PixelColor::new(255, 0, 0, 0);
        assert_ne!(faint, gone);
        assert_eq!(faint.distance(gone), 1);
    }

    #[test]
    fn test_distance_sums_channels() {
        let a = PixelColor::new(10, 20, 30, 255);
        let b = PixelColor::new(15, 10, 30, 250);
        assert_eq!(a.distance(b), 5 + 10 + 0 + 5);
        assert_eq!(b.distance(a), 20);
    }

    #[test]
    fn test_distance_zero_for_transparent_pair() {
        let a = PixelColor::new(1, 2, 3, 0);
        let b = PixelColor::new(200, 100, 50, 0);
        assert_eq!(a.distance(b), 0);
    }

    #[test]
    fn test_distance_maximum() {
        let black = PixelColor::new(0, 0, 0, 0);
        let white = PixelColor::new(255, 255, 255, 255);
        // Black is transparent but white is not, so they are not equal
        assert_eq!(black.distance(white), 1020);
    }

    #[test]
    fn test_word_packing_is_little_endian_rgba() {
        let c = PixelColor::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_u32(), 0x4433_2211);
        assert_eq!(PixelColor::from_u32(0xFF00_0000), PixelColor::OPAQUE_BLACK);
        assert_eq!(c.to_bytes(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_default_is_opaque_black() {
        let c = PixelColor::default();
        assert_eq!(c.to_bytes(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_rgba_conversion() {
        let px = Rgba([9, 8, 7, 6]);
        let c = PixelColor::from(px);
        assert_eq!(c.to_bytes(), [9, 8, 7, 6]);
        assert_eq!(Rgba::from(c), px);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(PixelColor::new(255, 128, 0, 255).to_string(), "#FF8000FF");
    }
}
