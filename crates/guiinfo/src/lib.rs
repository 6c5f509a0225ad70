mod engine;
mod query;
mod snapshot;

pub mod clock;
pub mod domain;
pub mod format;
pub mod samplers;
pub mod sources;

pub use engine::GuiInfoCache;
pub use format::TimeFormat;
pub use query::{BoolInfo, CharInfo, IntInfo, MultiInfo, VideoLabel};
pub use sources::{Services, SourceError, TimerClass};
