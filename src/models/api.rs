use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::availability::{NormalizedInterval, WeekdayInterval};

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Deserialize, ToSchema)]
pub struct AvailabilityForm {
    /// One entry per weekday, Sunday (0) through Saturday (6)
    pub intervals: Vec<WeekdayInterval>,
}

#[derive(Deserialize, ToSchema)]
pub struct ConfirmBookingForm {
    pub name: String,
    pub email: String,
    pub observations: Option<String>,
    /// Chosen by the calendar step upstream, not entered in this form
    pub scheduling_date: DateTime<Utc>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub message: String,
    /// Field path to message, e.g. {"name": "Name must have at least 3 characters"}
    pub errors: BTreeMap<String, String>,
}

#[derive(Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub message: String,
    pub intervals: Vec<NormalizedInterval>,
}

#[derive(Serialize, ToSchema)]
pub struct BookingConfirmedResponse {
    pub success: bool,
    pub message: String,
    pub scheduled_date: String,
    pub scheduled_time: String,
}
