#![forbid(unsafe_code)]

pub mod backend;
pub mod misc;
pub mod playing;
pub mod timers;
pub mod timeshift;

pub use backend::{BackendDisplay, BackendStatsCache};
pub use misc::MiscFlags;
pub use playing::{EventWindow, PlayingEvent};
pub use timers::TimerCache;
pub use timeshift::TimeshiftInput;
