// Software plasma: a static wave field mapped through a cycling rainbow palette.
//
// Data flow:
// • `field` is computed once for the window size.
// • Every frame `pacer` advances the clock and asks `compositor` for new colors.
// • `draw` pushes the finished `FrameBuffer` to a minifb window.

pub mod color;
pub mod compositor;
pub mod config;
pub mod draw;
pub mod error;
pub mod field;
pub mod pacer;
pub mod palette;
pub mod types;
