use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::availability::set_availability_api,
        handlers::booking::confirm_booking_api,
    ),
    components(schemas(
        models::api::AvailabilityForm,
        models::api::ConfirmBookingForm,
        models::api::ApiResponse,
        models::api::ValidationErrorResponse,
        models::api::AvailabilityResponse,
        models::api::BookingConfirmedResponse,
        models::availability::WeekdayInterval,
        models::availability::NormalizedInterval,
        models::booking::BookingRequest,
    )),
    tags(
        (name = "availability", description = "Weekly availability form"),
        (name = "booking", description = "Booking confirmation form")
    )
)]
pub struct ApiDoc;
