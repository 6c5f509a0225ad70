#![forbid(unsafe_code)]

mod display;
mod error;
mod polling;

pub use display::Display;
pub use error::Error;
pub use polling::Polling;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub polling: Polling,
    pub display: Display,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file, layered over the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .extract()?;
        Ok(config.normalized())
    }

    pub fn normalized(mut self) -> Self {
        self.polling = self.polling.normalized();
        self
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn load_merges_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[polling]\ntoggle_interval = 5000\n\n[display]\nsignal_quality = false\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.polling.cycle, Duration::from_millis(1000));
        assert_eq!(config.polling.toggle_interval, Duration::from_millis(5000));
        assert!(!config.display.signal_quality);
        assert!(!config.display.hide_no_info_fallback);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config::new();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("cycle"));
        assert!(rendered.contains("toggle_interval"));
    }
}
