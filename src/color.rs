// Packed colors for the window buffer.
// Layout is 0xAARRGGBB: minifb ignores the top byte, so an opaque alpha is
// carried along for free and every pixel can be pushed to the screen as-is.

use bytemuck::{Pod, Zeroable};

/// One packed 32-bit color. Alpha is always 255 when built through the constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF_00_00_00);
    pub const WHITE: Color = Color(0xFF_FF_FF_FF);

    /// Build a color from channels in [0,1].
    /// Each channel is truncated to `channel * 255`, so 1.0 maps to 255 and
    /// anything just below it maps to 254.
    ///
    /// Panics if any channel is outside [0,1] (or NaN).
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        assert!((0.0..=1.0).contains(&r), "red channel out of [0,1]: {r}");
        assert!((0.0..=1.0).contains(&g), "green channel out of [0,1]: {g}");
        assert!((0.0..=1.0).contains(&b), "blue channel out of [0,1]: {b}");

        let r = (r * 255.0) as u32;
        let g = (g * 255.0) as u32;
        let b = (b * 255.0) as u32;
        Color((255 << 24) | (r << 16) | (g << 8) | b)
    }

    /// Same value on all three channels.
    pub fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Standard HSV -> RGB conversion.
    /// `h` is in degrees [0,360), `s` and `v` in [0,1]; anything else panics.
    pub fn hsv(h: f32, s: f32, v: f32) -> Self {
        assert!((0.0..360.0).contains(&h), "hue out of [0,360): {h}");
        assert!((0.0..=1.0).contains(&s), "saturation out of [0,1]: {s}");
        assert!((0.0..=1.0).contains(&v), "value out of [0,1]: {v}");

        let c = v * s;
        let hp = h / 60.0;
        let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());

        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = v - c;
        // c + m is v in exact math; rounding can land one ulp past 1.0
        Self::rgb(
            (r1 + m).min(1.0),
            (g1 + m).min(1.0),
            (b1 + m).min(1.0),
        )
    }

    #[inline]
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn to_u32(self) -> u32 {
        self.0
    }
}
