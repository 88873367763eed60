// Library exports for testing and potential library use

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod clock;
pub mod clock_face;
pub mod debug;
pub mod glyph;
pub mod poller;
pub mod surface;
pub mod text_surface;
pub mod time_source;

pub use clock::{Clock, ClockState};
pub use surface::{ClockSurface, DigitPosition, Field};
pub use time_source::{ClockTime, ManualTimeSource, SystemTimeSource, TimeSource};
