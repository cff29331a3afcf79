use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use slotbook_api::clients::SchedulingApi;
use slotbook_api::handlers;
use slotbook_api::models::{BookingRequest, ServiceError};
use slotbook_api::services::{AvailabilityService, BookingService};

/// Test double for the remote scheduling service: records every call and can
/// be toggled to fail.
pub struct RecordingSchedulingApi {
    calls: Mutex<Vec<(String, BookingRequest)>>,
    fail: Mutex<bool>,
}

impl RecordingSchedulingApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: Mutex::new(false),
        }
    }

    #[allow(dead_code)]
    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<(String, BookingRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchedulingApi for RecordingSchedulingApi {
    async fn create_schedule(
        &self,
        username: &str,
        request: &BookingRequest,
    ) -> Result<(), ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((username.to_string(), request.clone()));

        if *self.fail.lock().unwrap() {
            return Err(ServiceError::RemoteApi(
                "scheduling service is down".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub scheduling_api: Arc<RecordingSchedulingApi>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            scheduling_api: Arc::new(RecordingSchedulingApi::new()),
        }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let availability_service = web::Data::new(AvailabilityService::new());
        let scheduling_api: Arc<dyn SchedulingApi> = self.scheduling_api.clone();
        let booking_service = web::Data::new(BookingService::new(scheduling_api));

        App::new()
            .app_data(availability_service)
            .app_data(booking_service)
            .route(
                "/api/availability",
                web::post().to(handlers::availability::set_availability_api),
            )
            .route(
                "/api/users/{username}/booking",
                web::post().to(handlers::booking::confirm_booking_api),
            )
    }
}

/// Builds one weekday interval entry for an availability payload.
#[allow(dead_code)]
pub fn interval(week_day: u8, enabled: bool, start_time: &str, end_time: &str) -> serde_json::Value {
    serde_json::json!({
        "week_day": week_day,
        "enabled": enabled,
        "start_time": start_time,
        "end_time": end_time
    })
}
