//! Clock state machine: holds the displayed time and the paused flag.
//!
//! The clock never owns its surface; the caller passes it to every call that
//! may render, which keeps the face free to be painted (and re-themed)
//! between ticks.

use crate::surface::{ClockSurface, render_time};
use crate::time_source::{ClockTime, TimeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Paused,
}

pub struct Clock<T: TimeSource> {
    source: T,
    current: ClockTime,
    state: ClockState,
}

impl<T: TimeSource> Clock<T> {
    /// Create a running clock showing the time sampled right now.
    pub fn new(source: T) -> Self {
        let current = source.now();
        Self {
            source,
            current,
            state: ClockState::Running,
        }
    }

    pub fn current_time(&self) -> &ClockTime {
        &self.current
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    /// Build the surface and draw the construction-time value once.
    pub fn start<S: ClockSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.build();
        render_time(surface, &self.current);
        log::info!("Clock started at {}", self.current);
    }

    /// Poll handler: re-render if the sampled time differs from the shown one.
    ///
    /// Ignored while paused. Returns whether a render happened.
    pub fn tick<S: ClockSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state == ClockState::Paused {
            return false;
        }
        let now = self.source.now();
        if now == self.current {
            return false;
        }
        log::trace!("Clock {} -> {}", self.current, now);
        self.current = now;
        render_time(surface, &self.current);
        true
    }

    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            log::debug!("Clock paused at {}", self.current);
        }
        self.state = ClockState::Paused;
    }

    /// Resume and catch up immediately rather than waiting for the next tick.
    ///
    /// Returns whether the catch-up rendered.
    pub fn resume<S: ClockSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state == ClockState::Paused {
            log::debug!("Clock resumed");
        }
        self.state = ClockState::Running;
        self.tick(surface)
    }
}

impl<T: TimeSource> std::fmt::Debug for Clock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("current", &self.current)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
