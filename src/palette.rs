// The rainbow palette the plasma cycles through.
// Visual: 360 fully saturated hues, red -> yellow -> green -> cyan -> blue -> magenta -> red.

use crate::color::Color;
use crate::types::FrameBuffer;

pub struct Palette {
    colors: Vec<Color>, // index = hue in degrees
}

impl Palette {
    pub const SIZE: usize = 360;

    /// Build the hue wheel once at startup. Always the same 360 colors.
    pub fn new() -> Self {
        let colors = (0..Self::SIZE)
            .map(|h| Color::hsv(h as f32, 1.0, 1.0))
            .collect();
        Self { colors }
    }

    /// Cyclic lookup. Negative indices wrap backwards instead of panicking.
    #[inline]
    pub fn get(&self, index: i64) -> Color {
        let i = index.rem_euclid(self.colors.len() as i64) as usize;
        self.colors[i]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint the palette as a horizontal strip, one column per entry.
/// Visual: a rainbow band `palette.len()` pixels wide and `strip_height` tall at (x,y).
/// Parts falling outside the frame are skipped.
pub fn draw_palette(fb: &mut FrameBuffer, palette: &Palette, x: usize, y: usize, strip_height: usize) {
    for (c, &color) in palette.iter().enumerate() {
        let col = x + c;
        if col >= fb.width() {
            break;
        }
        for row in y..(y + strip_height).min(fb.height()) {
            fb.set(col, row, color);
        }
    }
}
