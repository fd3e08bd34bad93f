//! TOML configuration file for eligibility rules and display defaults.
//!
//! ```toml
//! [eligibility]
//! min_date = "2016-06-01"
//! max_date = "2016-07-31"
//! disabled_dates = ["2016-06-14"]
//! disable_weekends = true
//!
//! [display]
//! week_start = "monday"
//! month_format = "%B %Y"
//! ```

use std::path::Path;

use chrono::Weekday;
use log::debug;
use serde::Deserialize;

use crate::eligibility::EligibilityConfig;
use crate::error::CalError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub eligibility: EligibilityConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub week_start: Option<WeekStart>,
    pub month_format: Option<String>,
    pub adjacent: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

impl ConfigFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CalError> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, CalError> {
        Ok(toml::from_str(text)?)
    }
}
