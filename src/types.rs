// The pixel buffer every frame is drawn into before it goes to the window.

use crate::color::Color;

/// Row-major, top-down grid of packed colors.
/// Visual: this is the image you actually see each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: usize,       // how wide the frame is on screen (pixels)
    height: usize,      // how tall the frame is on screen (pixels)
    pixels: Vec<Color>, // length = width * height
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Color::BLACK; width * height] }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Color at (x,y), or None outside the frame.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel. Returns false (and writes nothing) outside the frame.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// The buffer as 0xAARRGGBB words, the layout minifb blits directly.
    pub fn as_u32(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }
}
