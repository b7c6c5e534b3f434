//! Request/response plumbing shared by the use cases.

use drivetest_domain::{request::Endpoint, request::RequestSpec};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpClient;

/// Longest body excerpt carried in an `UnexpectedStatus` error.
const ERROR_BODY_LIMIT: usize = 512;

/// Sends `request` and decodes a successful response body as JSON.
pub(crate) async fn get_json<C: HttpClient + ?Sized>(
    client: &C,
    endpoint: Endpoint,
    request: RequestSpec,
) -> ApplicationResult<Value> {
    let url = request.full_url()?;
    debug!(%endpoint, %url, "sending request");

    let response = client.execute(&request).await?;
    debug!(
        %endpoint,
        status = response.status,
        size = response.size(),
        elapsed_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
        "received response"
    );

    if !response.is_success() {
        let body: String = response.body_text().chars().take(ERROR_BODY_LIMIT).collect();
        warn!(%endpoint, status = response.status, "server rejected request");
        return Err(ApplicationError::UnexpectedStatus {
            endpoint,
            status: response.status,
            body,
        });
    }

    Ok(response.json()?)
}
