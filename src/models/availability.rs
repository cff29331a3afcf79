use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ServiceError;

/// One entry per day of the week, 0 = Sunday.
pub const WEEK_DAY_COUNT: usize = 7;

pub const DEFAULT_START_TIME: &str = "08:00";
pub const DEFAULT_END_TIME: &str = "18:00";

/// A day-of-week paired with an enabled flag and a start/end time-of-day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeekdayInterval {
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub week_day: u8,
    pub enabled: bool,
    /// Wall-clock time of day, "HH:MM"
    pub start_time: String,
    /// Wall-clock time of day, "HH:MM"
    pub end_time: String,
}

impl WeekdayInterval {
    fn default_for(week_day: u8) -> Self {
        Self {
            week_day,
            // Monday through Friday start out enabled
            enabled: (1..=5).contains(&week_day),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
        }
    }
}

/// A full week of availability intervals. The constructor guarantees exactly
/// one interval per weekday in ascending order, so the validation rules never
/// have to re-check the structure.
#[derive(Debug, Clone)]
pub struct WeeklyAvailability {
    intervals: [WeekdayInterval; WEEK_DAY_COUNT],
}

impl WeeklyAvailability {
    pub fn from_intervals(intervals: Vec<WeekdayInterval>) -> Result<Self, ServiceError> {
        let intervals: [WeekdayInterval; WEEK_DAY_COUNT] =
            intervals.try_into().map_err(|v: Vec<WeekdayInterval>| {
                ServiceError::BadRequest(format!(
                    "Expected exactly {} weekday intervals, got {}",
                    WEEK_DAY_COUNT,
                    v.len()
                ))
            })?;

        for (position, interval) in intervals.iter().enumerate() {
            if usize::from(interval.week_day) != position {
                return Err(ServiceError::BadRequest(
                    "Intervals must cover each weekday exactly once, Sunday first".to_string(),
                ));
            }
        }

        Ok(Self { intervals })
    }

    pub fn intervals(&self) -> &[WeekdayInterval] {
        &self.intervals
    }
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self {
            intervals: std::array::from_fn(|day| WeekdayInterval::default_for(day as u8)),
        }
    }
}

/// A weekday interval converted to minute-offset form, kept only for enabled
/// days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedInterval {
    pub week_day: u8,
    /// Minutes since midnight
    pub start_time_in_minutes: u16,
    /// Minutes since midnight
    pub end_time_in_minutes: u16,
}
