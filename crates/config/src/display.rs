#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    /// Whether to poll the playing backend for signal quality each cycle.
    pub signal_quality: bool,

    /// Hide the "no information available" fallback title instead of
    /// showing the placeholder text.
    pub hide_no_info_fallback: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            signal_quality: true,
            hide_no_info_fallback: false,
        }
    }
}
