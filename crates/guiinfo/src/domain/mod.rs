#![forbid(unsafe_code)]

mod backend;
mod epg;
mod item;
mod quality;
mod timebase;

pub use backend::{BackendRecord, COUNT_UNKNOWN};
pub use epg::{Channel, EpgEvent, Recording, TimerSched};
pub use item::DisplayItem;
pub use quality::{CAID_NOT_AVAILABLE, DescrambleInfo, QualityInfo};
pub use timebase::TimeBase;
