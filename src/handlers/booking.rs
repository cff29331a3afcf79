use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::models::{
    ApiResponse, BookingConfirmedResponse, ConfirmBookingForm, ServiceError,
    ValidationErrorResponse,
};
use crate::services::BookingService;

#[utoipa::path(
    post,
    path = "/api/users/{username}/booking",
    params(
        ("username" = String, Path, description = "Scheduling page owner")
    ),
    request_body = ConfirmBookingForm,
    responses(
        (status = 200, description = "Booking confirmed", body = BookingConfirmedResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 502, description = "Remote scheduling service unavailable", body = ApiResponse)
    )
)]
pub async fn confirm_booking_api(
    booking_service: web::Data<BookingService>,
    path: web::Path<String>,
    form: web::Json<ConfirmBookingForm>,
) -> Result<HttpResponse, ServiceError> {
    let username = path.into_inner();

    // Business logic delegation - service validates and forwards the booking
    let request = booking_service
        .confirm_booking(&username, form.into_inner())
        .await?;

    // Success response with display values derived from the scheduling date
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Booking confirmed",
        "scheduled_date": request.described_date(),
        "scheduled_time": request.described_time()
    })))
}
