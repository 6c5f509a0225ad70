#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

#[serde_as]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Polling {
    /// Fine cycle length (one full sampling pass per cycle).
    #[serde_as(as = "serde_with::DurationMilliSeconds")]
    pub cycle: Duration,

    /// Interval between display-slot toggles and backend list refreshes.
    #[serde_as(as = "serde_with::DurationMilliSeconds")]
    pub toggle_interval: Duration,
}

impl Default for Polling {
    fn default() -> Self {
        Self {
            cycle: Duration::from_millis(1000),
            toggle_interval: Duration::from_millis(3000),
        }
    }
}

impl Polling {
    /// Clamp the cadence to sane bounds. The toggle interval is never shorter
    /// than one cycle, otherwise a toggle boundary could be skipped entirely.
    pub fn normalized(self) -> Self {
        let cycle = self.cycle.max(Duration::from_millis(100));
        Self {
            cycle,
            toggle_interval: self.toggle_interval.max(cycle),
        }
    }

    /// Number of fine cycles between backend list refreshes.
    pub fn toggle_cycles(&self) -> u64 {
        let normalized = self.normalized();
        (normalized.toggle_interval.as_millis() / normalized.cycle.as_millis()).max(1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_keeps_toggle_at_least_one_cycle(cycle_ms in 0u64..60_000, toggle_ms in 0u64..60_000) {
            let polling = Polling {
                cycle: Duration::from_millis(cycle_ms),
                toggle_interval: Duration::from_millis(toggle_ms),
            }
            .normalized();
            prop_assert!(polling.cycle >= Duration::from_millis(100));
            prop_assert!(polling.toggle_interval >= polling.cycle);
            prop_assert!(polling.toggle_cycles() >= 1);
        }
    }
}
