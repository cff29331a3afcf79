use crate::models::{NormalizedInterval, ServiceError, ValidationErrors, WeeklyAvailability};
use crate::utils::time::convert_time_string_to_minutes;

pub struct AvailabilityService;

impl AvailabilityService {
    pub fn new() -> Self {
        Self
    }

    /// Validates a week of intervals and normalizes the enabled days to
    /// minute offsets. Rules run in order: filter to enabled days, reject an
    /// empty selection, convert to minutes, then enforce the one-hour minimum
    /// duration per day.
    pub fn set_weekly_availability(
        &self,
        availability: &WeeklyAvailability,
    ) -> Result<Vec<NormalizedInterval>, ServiceError> {
        let enabled: Vec<_> = availability
            .intervals()
            .iter()
            .filter(|interval| interval.enabled)
            .collect();

        if enabled.is_empty() {
            return Err(ServiceError::Validation(ValidationErrors::single(
                "intervals",
                "You must select at least one day of the week",
            )));
        }

        let mut normalized = Vec::with_capacity(enabled.len());
        for interval in enabled {
            normalized.push(NormalizedInterval {
                week_day: interval.week_day,
                start_time_in_minutes: convert_time_string_to_minutes(&interval.start_time)?,
                end_time_in_minutes: convert_time_string_to_minutes(&interval.end_time)?,
            });
        }

        let mut errors = ValidationErrors::new();
        for interval in &normalized {
            if interval.end_time_in_minutes < interval.start_time_in_minutes + 60 {
                errors.add(
                    format!("intervals.{}", interval.week_day),
                    "End time must be at least 1 hour after start time",
                );
            }
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        // Downstream persistence is not wired up yet; log the outcome only.
        tracing::info!(
            days = normalized.len(),
            "Weekly availability validated and normalized"
        );

        Ok(normalized)
    }
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new()
    }
}
