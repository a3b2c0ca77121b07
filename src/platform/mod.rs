//! Platform abstraction layer
//!
//! The game loop only talks to these traits:
//! - `Presenter`: takes the finished frame bytes once per frame
//! - `InputSource`: held keys plus the quit signal
//! - `Clock`: monotonic time and a blocking sleep
//!
//! `native` binds them to a real window, GPU and keyboard.

pub mod native;

use std::time::{Duration, Instant};

use crate::error::PlatformError;
use crate::sim::TickInput;

/// Receives an immutable view of the frame; the caller keeps ownership
pub trait Presenter {
    /// `frame` is RGBA8, row-major, `width * 4` bytes per row
    fn present(&mut self, frame: &[u8], width: u32, height: u32) -> Result<(), PlatformError>;
}

/// Everything polled from the input device for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub input: TickInput,
    /// Window close (or equivalent) seen since the last poll
    pub quit: bool,
}

pub trait InputSource {
    fn poll(&mut self) -> Result<FrameEvents, PlatformError>;
}

pub trait Clock {
    /// Monotonic time since the clock was created
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
