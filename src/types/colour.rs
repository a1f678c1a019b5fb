//! RGBA colour values and compositing.

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Return this colour with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linearly interpolate the RGB channels towards `end`.
    ///
    /// Each channel is `start * (1 - ratio) + end * ratio`, truncated.
    /// Channels with equal endpoints stay exactly constant. The result is
    /// always opaque.
    pub fn lerp(self, end: Colour, ratio: f64) -> Colour {
        let mix = |s: u8, e: u8| {
            if s == e {
                return s;
            }
            (s as f64 * (1.0 - ratio) + e as f64 * ratio) as u8
        };
        Colour::rgb(mix(self.r, end.r), mix(self.g, end.g), mix(self.b, end.b))
    }

    /// Composite this colour over `dst` (source-over, straight alpha).
    ///
    /// Opaque sources replace the destination exactly.
    pub fn over(self, dst: Colour) -> Colour {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = self.a as u32;
        let da = dst.a as u32;
        let inv = 255 - sa;
        // Output alpha scaled by 255.
        let out_a = sa * 255 + da * inv;
        if out_a == 0 {
            return Colour::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| {
            ((s as u32 * sa * 255 + d as u32 * da * inv + out_a / 2) / out_a) as u8
        };

        Colour::new(
            channel(self.r, dst.r),
            channel(self.g, dst.g),
            channel(self.b, dst.b),
            ((out_a + 127) / 255) as u8,
        )
    }
}

impl From<[u8; 4]> for Colour {
    fn from(rgba: [u8; 4]) -> Self {
        Colour::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_array() {
        assert_eq!(Colour::from([0, 0, 0, 50]), Colour::new(0, 0, 0, 50));
        assert_eq!(Colour::rgb(103, 80, 164).to_rgba(), [103, 80, 164, 255]);
    }

    #[test]
    fn test_lerp_endpoints() {
        let start = Colour::rgb(91, 192, 222);
        let end = Colour::rgb(129, 199, 132);
        assert_eq!(start.lerp(end, 0.0), start);
        assert_eq!(start.lerp(end, 1.0), end);
    }

    #[test]
    fn test_lerp_truncates() {
        let start = Colour::rgb(0, 0, 0);
        let end = Colour::rgb(3, 3, 3);
        // 3 * 0.5 = 1.5 -> 1
        assert_eq!(start.lerp(end, 0.5), Colour::rgb(1, 1, 1));
    }

    #[test]
    fn test_lerp_equal_channels_constant() {
        let grey = Colour::rgb(7, 7, 7);
        for step in 0..=48 {
            assert_eq!(grey.lerp(grey, step as f64 / 48.0), grey);
        }
        // Only the flat channel is pinned
        let out = Colour::rgb(7, 0, 200).lerp(Colour::rgb(7, 255, 100), 0.5);
        assert_eq!(out, Colour::rgb(7, 127, 150));
    }

    #[test]
    fn test_over_opaque_replaces() {
        let dst = Colour::rgb(10, 20, 30);
        assert_eq!(Colour::WHITE.over(dst), Colour::WHITE);
    }

    #[test]
    fn test_over_transparent_keeps_destination() {
        let dst = Colour::rgb(10, 20, 30);
        assert_eq!(Colour::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn test_over_empty_destination() {
        let shadow = Colour::new(0, 0, 0, 30);
        assert_eq!(shadow.over(Colour::TRANSPARENT), shadow);
    }

    #[test]
    fn test_over_darkens_opaque_background() {
        let shadow = Colour::new(0, 0, 0, 50);
        let out = shadow.over(Colour::WHITE);
        assert_eq!(out.a, 255);
        // 255 * (205 / 255) = 205
        assert_eq!(out.r, 205);
        assert_eq!(out.g, 205);
        assert_eq!(out.b, 205);
    }
}
