//! Habit tracking calendar and repair settings.

use humane_core::enums::{WeekStart, ZoneSetting};
use serde::{Deserialize, Serialize};

const fn default_prune() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// First day of the week used for weekly targets.
    #[serde(default)]
    pub week_starts_on: WeekStart,

    /// Zone used to turn stored timestamps into calendar days.
    #[serde(default)]
    pub time_zone: ZoneSetting,

    /// Drop references to deleted habits when repairing links.
    #[serde(default = "default_prune")]
    pub prune_dangling_on_repair: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::default(),
            time_zone: ZoneSetting::default(),
            prune_dangling_on_repair: default_prune(),
        }
    }
}
