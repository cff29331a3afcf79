use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The validated payload sent to reserve a time slot with a given person's
/// contact details. Serializes to the remote endpoint's wire shape:
/// `{name, email, observations, date}` with `observations` null when absent
/// and `date` as an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub observations: Option<String>,
    pub date: DateTime<Utc>,
}

impl BookingRequest {
    /// Human-readable date, e.g. "22 de September de 2022". Presentation only.
    pub fn described_date(&self) -> String {
        self.date.format("%d de %B de %Y").to_string()
    }

    /// Human-readable time of day, e.g. "18:00h". Presentation only.
    pub fn described_time(&self) -> String {
        self.date.format("%H:%Mh").to_string()
    }
}
