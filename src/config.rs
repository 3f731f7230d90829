use std::net::SocketAddr;

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};

use crate::data::{Day, Period};
use crate::error::ConfigError;

const MAX_THRESHOLD: u32 = 10;
const MAX_PERIODS_PER_DAY: Period = 12;
// room labels add at most 90 for the hash digit plus the period
pub const MAX_ROOM_BASE: u32 = u32::MAX - 90 - MAX_PERIODS_PER_DAY;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "BIND_ADDRESS", default = "127.0.0.1:8080")]
    pub address: SocketAddr,
}

/// How a view's assignment pointer behaves once it walks past the last assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerMode {
    /// Start over from the first assignment.
    #[default]
    Wrap,
    /// Stop scheduling for the rest of the week.
    Stop,
}

/// Tunables for one generation run. Any subset may be overridden per request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub days: Vec<Day>,
    pub periods_per_day: Period,
    pub aggregate_threshold: u32,
    pub teacher_threshold: u32,
    pub aggregate_room_base: u32,
    pub teacher_room_base: u32,
    pub teacher_pointer: PointerMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            periods_per_day: 6,
            aggregate_threshold: 4,
            teacher_threshold: 3,
            aggregate_room_base: 100,
            teacher_room_base: 200,
            teacher_pointer: PointerMode::Wrap,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("aggregateThreshold", self.aggregate_threshold),
            ("teacherThreshold", self.teacher_threshold),
        ] {
            if value > MAX_THRESHOLD {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.periods_per_day > MAX_PERIODS_PER_DAY {
            return Err(ConfigError::TooManyPeriods(self.periods_per_day));
        }
        for (name, value) in [
            ("aggregateRoomBase", self.aggregate_room_base),
            ("teacherRoomBase", self.teacher_room_base),
        ] {
            if value > MAX_ROOM_BASE {
                return Err(ConfigError::RoomBaseOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
