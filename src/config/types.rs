use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub companion: CompanionConfig,
}

/// Settings for the display process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of game rows in the list (default: 10).
    #[serde(default = "default_game_slots")]
    pub game_slots: usize,
    /// Number of scoring-play rows on the events screen (default: 6).
    /// Zero leaves the events screen out.
    #[serde(default = "default_event_slots")]
    pub event_slots: usize,
    /// UI tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Settings for the companion process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Root of the stats API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds between schedule refreshes (default: 30).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            game_slots: default_game_slots(),
            event_slots: default_event_slots(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_seconds: default_poll_interval(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_game_slots() -> usize {
    10
}

fn default_event_slots() -> usize {
    6
}

fn default_tick_ms() -> u64 {
    250
}

fn default_base_url() -> String {
    "https://statsapi.web.nhl.com/api/v1".to_string()
}

fn default_poll_interval() -> u64 {
    30
}

fn default_timeout() -> u64 {
    10
}
