use crate::domain::model::LocalTime;
use crate::domain::ports::ClockSource;
use chrono::{Datelike, Timelike, Utc};
use chrono_tz::Tz;

/// The business operates on Cyprus time (EET/EEST, DST handled by the zone
/// database compiled into chrono-tz).
pub const BUSINESS_TIMEZONE: Tz = chrono_tz::Europe::Nicosia;

/// System clock pinned to one named timezone.
#[derive(Debug, Clone, Copy)]
pub struct BusinessClock {
    zone: Tz,
}

impl BusinessClock {
    pub fn new() -> Self {
        Self {
            zone: BUSINESS_TIMEZONE,
        }
    }

    pub fn with_zone(zone: Tz) -> Self {
        Self { zone }
    }
}

impl Default for BusinessClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for BusinessClock {
    fn now(&self) -> LocalTime {
        let local = Utc::now().with_timezone(&self.zone);
        LocalTime {
            weekday: local.weekday().num_days_from_sunday() as u8,
            hour: local.hour() as u8,
            minute: local.minute() as u8,
        }
    }
}

/// Fixed clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: LocalTime,
}

impl FixedClock {
    pub fn new(time: LocalTime) -> Self {
        Self { time }
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> LocalTime {
        self.time
    }
}
