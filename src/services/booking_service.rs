use crate::clients::SchedulingApi;
use crate::models::{BookingRequest, ConfirmBookingForm, ServiceError, ValidationErrors};
use crate::utils::validation::is_valid_email;
use std::sync::Arc;

pub struct BookingService {
    scheduling_api: Arc<dyn SchedulingApi>,
}

impl BookingService {
    pub fn new(scheduling_api: Arc<dyn SchedulingApi>) -> Self {
        Self { scheduling_api }
    }

    /// Validates the confirmation form and, on success, forwards exactly one
    /// booking request to the remote scheduling endpoint. Validation failures
    /// short-circuit before any network call.
    pub async fn confirm_booking(
        &self,
        username: &str,
        form: ConfirmBookingForm,
    ) -> Result<BookingRequest, ServiceError> {
        let mut errors = ValidationErrors::new();
        if form.name.chars().count() < 3 {
            errors.add("name", "Name must have at least 3 characters");
        }
        if !is_valid_email(&form.email) {
            errors.add("email", "Enter a valid email");
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let request = BookingRequest {
            name: form.name,
            email: form.email,
            observations: form.observations,
            date: form.scheduling_date,
        };

        self.scheduling_api
            .create_schedule(username, &request)
            .await?;

        tracing::info!(username, date = %request.date, "Booking confirmed");

        Ok(request)
    }
}
