use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds between UI ticks.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub sheet: SheetConfig,
}

/// Sheet presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Share of the content area covered by a presented sheet, in percent.
    #[serde(default = "default_height_percent")]
    pub height_percent: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            sheet: SheetConfig::default(),
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            height_percent: default_height_percent(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_height_percent() -> u16 {
    60
}
