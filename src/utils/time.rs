use crate::models::ServiceError;

/// Converts a wall-clock "HH:MM" string to minutes since midnight.
///
/// Inputs come from a time-picker control upstream, so a malformed string is a
/// programming error rather than a user-facing validation case.
pub fn convert_time_string_to_minutes(time: &str) -> Result<u16, ServiceError> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| ServiceError::Internal(format!("Invalid time string: {}", time)))?;

    let hours: u16 = hours
        .parse()
        .map_err(|_| ServiceError::Internal(format!("Invalid time string: {}", time)))?;
    let minutes: u16 = minutes
        .parse()
        .map_err(|_| ServiceError::Internal(format!("Invalid time string: {}", time)))?;

    if hours > 23 || minutes > 59 {
        return Err(ServiceError::Internal(format!(
            "Time of day out of range: {}",
            time
        )));
    }

    Ok(hours * 60 + minutes)
}
