use crate::models::{BookingRequest, ServiceError};
use async_trait::async_trait;

/// Outbound boundary to the remote scheduling service. Injected so tests can
/// swap in a recording double.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    async fn create_schedule(
        &self,
        username: &str,
        request: &BookingRequest,
    ) -> Result<(), ServiceError>;
}

pub struct HttpSchedulingApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSchedulingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SchedulingApi for HttpSchedulingApi {
    async fn create_schedule(
        &self,
        username: &str,
        request: &BookingRequest,
    ) -> Result<(), ServiceError> {
        let url = format!(
            "{}/users/{}/schedule",
            self.base_url.trim_end_matches('/'),
            username
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::RemoteApi(format!("POST {} failed: {}", url, e)))?;

        // Body is not inspected, only the status matters here
        response
            .error_for_status()
            .map_err(|e| ServiceError::RemoteApi(format!("POST {} rejected: {}", url, e)))?;

        Ok(())
    }
}
