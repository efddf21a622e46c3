// The static plasma pattern.
// Visual: soft overlapping waves (vertical bands, horizontal bands, diagonals and
// rings from the top-left corner). Computed once; the animation comes from
// cycling the palette, never from recomputing this.

// Wavelength divisors for the four layers.
const X_FREQ: f32 = 20.0;
const Y_FREQ: f32 = 16.0;
const DIAG_FREQ: f32 = 30.0;
const RADIAL_FREQ: f32 = 18.0;

/// Map a sine from [-1,1] into [0,1].
#[inline]
fn unit_sin(t: f32) -> f32 {
    0.5 + 0.5 * t.sin()
}

/// Plasma value at one pixel, always in [0,1].
#[inline]
pub fn plasma_at(x: usize, y: usize) -> f32 {
    let (fx, fy) = (x as f32, y as f32);
    let sum = unit_sin(fx / X_FREQ)
        + unit_sin(fy / Y_FREQ)
        + unit_sin((fx + fy) / DIAG_FREQ)
        + unit_sin((fx * fx + fy * fy).sqrt() / RADIAL_FREQ);
    // rounding in the four terms must not leak past the ends
    (sum / 4.0).clamp(0.0, 1.0)
}

/// Normalized scalar per pixel, same shape as the window.
#[derive(Clone, Debug, PartialEq)]
pub struct PlasmaField {
    width: usize,
    height: usize,
    values: Vec<f32>, // row-major, top-down
}

impl PlasmaField {
    pub fn new(width: usize, height: usize) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(plasma_at(x, y));
            }
        }
        Self { width, height, values }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn value(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.values[y * self.width + x])
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn origin_is_the_midpoint() {
        // every sine is sin(0) = 0, so each term is 0.5
        assert_eq!(plasma_at(0, 0), 0.5);
    }

    #[test]
    fn matches_the_formula_at_a_sample() {
        let (x, y) = (37.0f32, 91.0f32);
        let expected = ((0.5 + 0.5 * (x / 20.0).sin())
            + (0.5 + 0.5 * (y / 16.0).sin())
            + (0.5 + 0.5 * ((x + y) / 30.0).sin())
            + (0.5 + 0.5 * ((x * x + y * y).sqrt() / 18.0).sin()))
            / 4.0;
        assert!((plasma_at(37, 91) - expected).abs() < 1e-6);
    }

    #[test]
    fn full_windows_stay_in_unit_range() {
        for (w, h) in [(400, 400), (800, 600)] {
            let f = PlasmaField::new(w, h);
            assert_eq!(f.values().len(), w * h);
            assert!(f.values().iter().all(|v| (0.0..=1.0).contains(v)));
            // corners
            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                let v = f.value(x, y).unwrap();
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn generation_is_idempotent() {
        assert_eq!(PlasmaField::new(64, 48), PlasmaField::new(64, 48));
    }

    #[test]
    fn value_is_row_major_and_bounded() {
        let f = PlasmaField::new(10, 5);
        assert_eq!(f.value(3, 2), Some(f.values()[2 * 10 + 3]));
        assert_eq!(f.value(3, 2), Some(plasma_at(3, 2)));
        assert_eq!(f.value(10, 0), None);
        assert_eq!(f.value(0, 5), None);
    }

    #[test]
    fn empty_field_is_allowed() {
        let f = PlasmaField::new(0, 0);
        assert!(f.values().is_empty());
    }

    proptest! {
        #[test]
        fn any_pixel_is_in_unit_range(x in 0usize..4096, y in 0usize..4096) {
            let v = plasma_at(x, y);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
