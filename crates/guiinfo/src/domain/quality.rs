#![forbid(unsafe_code)]

use crate::format::NOT_AVAILABLE;

/// Instantaneous signal-quality sample of the playing stream. Raw signal and
/// SNR use the full 0..=0xFFFF range reported by tuner frontends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityInfo {
    pub adapter_name: String,
    pub adapter_status: String,
    pub service_name: String,
    pub provider_name: String,
    pub mux_name: String,
    pub signal: u16,
    pub snr: u16,
    pub ber: u32,
    pub unc: u32,
}

impl Default for QualityInfo {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl QualityInfo {
    /// The "no tuner" sample: zero counters, placeholder adapter fields.
    pub fn unavailable() -> Self {
        Self {
            adapter_name: NOT_AVAILABLE.to_owned(),
            adapter_status: NOT_AVAILABLE.to_owned(),
            service_name: String::new(),
            provider_name: String::new(),
            mux_name: String::new(),
            signal: 0,
            snr: 0,
            ber: 0,
            unc: 0,
        }
    }

    pub fn signal_percent(&self) -> i32 {
        (f32::from(self.signal) / f32::from(u16::MAX) * 100.0) as i32
    }

    pub fn snr_percent(&self) -> i32 {
        (f32::from(self.snr) / f32::from(u16::MAX) * 100.0) as i32
    }
}

/// Conditional-access id marking descramble data as not reported.
pub const CAID_NOT_AVAILABLE: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescrambleInfo {
    pub pid: i32,
    pub caid: i32,
    pub provider_id: i32,
    pub ecm_time_ms: i32,
    pub hops: i32,
    pub card_system: String,
    pub reader: String,
    pub from: String,
    pub protocol: String,
}

impl Default for DescrambleInfo {
    fn default() -> Self {
        Self {
            pid: CAID_NOT_AVAILABLE,
            caid: CAID_NOT_AVAILABLE,
            provider_id: CAID_NOT_AVAILABLE,
            ecm_time_ms: CAID_NOT_AVAILABLE,
            hops: CAID_NOT_AVAILABLE,
            card_system: String::new(),
            reader: String::new(),
            from: String::new(),
            protocol: String::new(),
        }
    }
}

impl DescrambleInfo {
    pub fn available(&self) -> bool {
        self.caid != CAID_NOT_AVAILABLE
    }
}
