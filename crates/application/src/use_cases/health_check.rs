//! Health check use case.

use std::sync::Arc;

use drivetest_domain::{ClientConfig, HealthStatus, request::Endpoint, request::RequestSpec};

use super::exchange::get_json;
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Use case for probing `GET /healthy`.
pub struct HealthCheck<C: HttpClient> {
    client: Arc<C>,
    config: ClientConfig,
}

impl<C: HttpClient> HealthCheck<C> {
    /// Creates a new `HealthCheck` use case.
    pub const fn new(client: Arc<C>, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Returns the server's health message.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable, answers with a non-2xx
    /// status, or sends a body that is not JSON.
    pub async fn execute(&self) -> ApplicationResult<HealthStatus> {
        let url = self.config.endpoint(Endpoint::Health)?;
        let body = get_json(self.client.as_ref(), Endpoint::Health, RequestSpec::get(url)).await?;
        Ok(HealthStatus::from_json_value(body))
    }
}
