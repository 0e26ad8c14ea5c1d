use std::ops::{Add, AddAssign, Mul};

/// Linear RGB color, nominally in `[0, 1]` per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }

    #[inline]
    pub fn clamp(&self) -> Color {
        Color::new(self.r.clamp(0.0, 1.0), self.g.clamp(0.0, 1.0), self.b.clamp(0.0, 1.0))
    }

    /// Packs into a 32-bit value: red in the least significant byte, then
    /// green, blue, and an opaque alpha in the most significant byte.
    ///
    /// In memory on a little-endian host this is the `[r, g, b, a]` byte
    /// sequence expected by `image::Rgba`.
    pub fn to_rgba32(&self) -> u32 {
        let c = self.clamp();
        let channel = |v: f64| (v * 255.0) as u32;

        0xffu32 << 24 | channel(c.b) << 16 | channel(c.g) << 8 | channel(c.r)
    }

    pub fn from_rgba32(rgba: u32) -> Self {
        let channel = |shift: u32| ((rgba >> shift) & 0xff) as f64 / 255.0;

        Color::new(channel(0), channel(8), channel(16))
    }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Color::new(v[0], v[1], v[2])
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, other: Color) -> Self::Output {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, other: Color) {
        *self = *self + other;
    }
}

/// Component-wise product, used to filter light through a material.
impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, other: Color) -> Self::Output {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_red_into_low_byte() {
        assert_eq!(0xff0000ff, Color::new(1.0, 0.0, 0.0).to_rgba32());
        assert_eq!(0xff00ff00, Color::new(0.0, 1.0, 0.0).to_rgba32());
        assert_eq!(0xffff0000, Color::BLUE.to_rgba32());
    }

    #[test]
    fn packing_clamps_out_of_range_channels() {
        assert_eq!(0xff0000ff, Color::new(7.0, -1.0, -0.5).to_rgba32());
    }

    #[test]
    fn unpack_inverts_pack_on_exact_channels() {
        let c = Color::new(1.0, 0.0, 1.0);
        assert_eq!(c, Color::from_rgba32(c.to_rgba32()));
    }
}
