// Turns the static field into this frame's colors.
// Visual: the whole rainbow slides through the waves; nothing about the field
// itself moves, only the offset into the palette.

use crate::error::Error;
use crate::field::PlasmaField;
use crate::palette::Palette;
use crate::types::FrameBuffer;

/// Palette steps per second of elapsed time.
pub const SHIFT_SPEED: f64 = 200.0;
/// Field values in [0,1] are spread over this many palette steps.
pub const FIELD_SCALE: f32 = 256.0;

/// Integer palette offset for the given elapsed time (seconds).
#[inline]
pub fn palette_shift(elapsed: f64) -> i64 {
    (elapsed * SHIFT_SPEED).floor() as i64
}

/// What gets drawn every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compositor {
    /// Leaves the frame as it is.
    Static,
    /// Field + time-shifted palette.
    Plasma,
}

impl Compositor {
    pub fn render(
        &self,
        field: &PlasmaField,
        palette: &Palette,
        elapsed: f64,
        fb: &mut FrameBuffer,
    ) -> Result<(), Error> {
        match self {
            Compositor::Static => Ok(()),
            Compositor::Plasma => render_plasma(field, palette, palette_shift(elapsed), fb),
        }
    }
}

/// Write `palette[floor(field * 256) + shift]` into every pixel.
pub fn render_plasma(
    field: &PlasmaField,
    palette: &Palette,
    shift: i64,
    fb: &mut FrameBuffer,
) -> Result<(), Error> {
    if field.width() != fb.width() || field.height() != fb.height() {
        return Err(Error::DimensionMismatch {
            field: (field.width(), field.height()),
            frame: (fb.width(), fb.height()),
        });
    }

    for (px, &v) in fb.pixels_mut().iter_mut().zip(field.values()) {
        let index = (v * FIELD_SCALE) as i64 + shift;
        *px = palette.get(index);
    }
    Ok(())
}
