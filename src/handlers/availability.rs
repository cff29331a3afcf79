use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::models::{
    AvailabilityForm, AvailabilityResponse, ServiceError, ValidationErrorResponse,
    WeeklyAvailability,
};
use crate::services::AvailabilityService;

#[utoipa::path(
    post,
    path = "/api/availability",
    request_body = AvailabilityForm,
    responses(
        (status = 200, description = "Availability validated and normalized", body = AvailabilityResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse)
    )
)]
pub async fn set_availability_api(
    availability_service: web::Data<AvailabilityService>,
    form: web::Json<AvailabilityForm>,
) -> Result<HttpResponse, ServiceError> {
    // Convert API model to domain model; rejects anything but 7 ordered weekdays
    let availability = WeeklyAvailability::from_intervals(form.into_inner().intervals)?;

    // Business logic delegation - service handles all validation rules
    let intervals = availability_service.set_weekly_availability(&availability)?;

    // Success response
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Weekly availability saved",
        "intervals": intervals
    })))
}
