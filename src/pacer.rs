// Frame pacing and the render loop.
// Visual: one pass of `AppState::tick` is one frame on screen. Long stalls
// (dragging the window, a debugger break) are absorbed by clamping dt, so
// the colors never jump ahead after a hitch.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::compositor::Compositor;
use crate::error::Error;
use crate::field::PlasmaField;
use crate::palette::{Palette, draw_palette};
use crate::types::FrameBuffer;

/// Ceiling on how much simulated time one frame may advance (seconds).
pub const TARGET_DT: f64 = 1.0 / 60.0;

/// Where the optional palette debug strip goes.
pub const STRIP_X: usize = 20;
pub const STRIP_Y: usize = 20;
pub const STRIP_HEIGHT: usize = 40;

/// Keys the loop cares about. Everything else is carried as its raw code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Other(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Other,
}

impl Event {
    /// Quit, or Escape going either down or up.
    pub fn is_stop(&self) -> bool {
        matches!(
            self,
            Event::Quit | Event::KeyDown(KeyCode::Escape) | Event::KeyUp(KeyCode::Escape)
        )
    }
}

/// Non-blocking source of window events.
pub trait EventSource {
    /// Next pending event, or None when the queue is empty. Must not wait.
    fn poll_event(&mut self) -> Option<Event>;

    /// Hand an event the loop doesn't consume back to the platform.
    fn dispatch(&mut self, event: Event);
}

/// Something that can show a finished frame.
pub trait Surface {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Monotonic time bookkeeping for the loop.
#[derive(Clone, Debug)]
pub struct ClockState {
    last: Instant,
    dt: f64,
    elapsed: f64,
}

impl ClockState {
    pub fn new(start: Instant) -> Self {
        Self { last: start, dt: 0.0, elapsed: 0.0 }
    }

    /// Time since the previous sample, capped at `TARGET_DT`.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let raw = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        self.dt = raw.min(TARGET_DT);
        self.dt
    }

    /// Fold the last dt into the running total and return it.
    pub fn accumulate(&mut self) -> f64 {
        self.elapsed += self.dt;
        self.elapsed
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Counts presented frames and reports a rate once per second.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(start: Instant) -> Self {
        Self { window_start: start, frames: 0 }
    }

    /// Record one frame. Returns the measured rate when a full second has passed.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let span = now.saturating_duration_since(self.window_start);
        if span < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / span.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

/// Everything the render loop owns.
pub struct AppState {
    pub field: PlasmaField,
    pub palette: Palette,
    pub screen: FrameBuffer,
    pub compositor: Compositor,
    pub clock: ClockState,
    pub fps: FpsCounter,
    pub palette_strip: bool,
    state: LoopState,
}

impl AppState {
    /// Precompute the field and palette for a `width` x `height` window.
    pub fn new(
        width: usize,
        height: usize,
        compositor: Compositor,
        palette_strip: bool,
        start: Instant,
    ) -> Self {
        let field = PlasmaField::new(width, height);
        debug!(width, height, "plasma field ready");
        let palette = Palette::new();
        debug!(entries = palette.len(), "palette ready");

        Self {
            field,
            palette,
            screen: FrameBuffer::new(width, height),
            compositor,
            clock: ClockState::new(start),
            fps: FpsCounter::new(start),
            palette_strip,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// One frame: sample the clock, drain events, render, present.
    pub fn tick<W>(&mut self, now: Instant, window: &mut W) -> Result<LoopState, Error>
    where
        W: EventSource + Surface + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        self.clock.sample(now);

        while let Some(event) = window.poll_event() {
            if event.is_stop() {
                info!(?event, elapsed = self.clock.elapsed(), "stop requested");
                self.state = LoopState::Stopped;
                return Ok(LoopState::Stopped);
            }
            trace!(?event, "forwarding event");
            window.dispatch(event);
        }

        let elapsed = self.clock.accumulate();
        self.compositor.render(&self.field, &self.palette, elapsed, &mut self.screen)?;
        if self.palette_strip {
            draw_palette(&mut self.screen, &self.palette, STRIP_X, STRIP_Y, STRIP_HEIGHT);
        }

        window.present(&self.screen)?;

        if let Some(fps) = self.fps.frame(now) {
            info!("frame rate: {fps:.1} fps");
        }
        Ok(LoopState::Running)
    }

    /// Tick on the wall clock until a stop event arrives.
    pub fn run<W>(&mut self, window: &mut W) -> Result<(), Error>
    where
        W: EventSource + Surface + ?Sized,
    {
        while self.tick(Instant::now(), window)? == LoopState::Running {}
        Ok(())
    }
}
