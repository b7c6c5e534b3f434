//! Fetch test use case.

use std::sync::Arc;

use drivetest_domain::{ClientConfig, Test, request::Endpoint, request::RequestSpec};
use tracing::info;

use super::exchange::get_json;
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Use case for retrieving a test from `GET /test`.
///
/// Every call issues a fresh request; nothing is cached.
pub struct FetchTest<C: HttpClient> {
    client: Arc<C>,
    config: ClientConfig,
}

impl<C: HttpClient> FetchTest<C> {
    /// Creates a new `FetchTest` use case.
    pub const fn new(client: Arc<C>, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Fetches a test and builds the record from the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid, the request fails, the
    /// server answers with a non-2xx status, or the body is not a valid test.
    pub async fn execute(&self) -> ApplicationResult<Test> {
        let url = self.config.endpoint(Endpoint::Test)?;
        let body = get_json(self.client.as_ref(), Endpoint::Test, RequestSpec::get(url)).await?;
        let test = Test::from_json_value(body)?;

        info!(
            test_id = %test.id(),
            answers = test.answers().len(),
            has_image = test.image().is_some(),
            "fetched test"
        );
        Ok(test)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::HttpClientError;
    use crate::testing::{MockHttpClient, json_response};
    use drivetest_domain::{DomainError, Identifier};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::new("https://quiz.test:5050")
    }

    #[tokio::test]
    async fn test_fetch_reference_test() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Ok(json_response(
                200,
                &json!({"id": 1, "description": "d", "answers": ["a", "b"], "image": null}),
            ))
        }));
        let use_case = FetchTest::new(Arc::clone(&client), config());

        let test = use_case.execute().await.unwrap();

        assert_eq!(test.id(), &Identifier::from(1_i64));
        assert_eq!(test.description(), "d");
        let answers: Vec<_> = test.answers().iter().map(ToString::to_string).collect();
        assert_eq!(answers, vec!["a", "b"]);
        assert!(test.image().is_none());

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.as_str(), "https://quiz.test:5050/test");
        assert!(requests[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_every_call_hits_the_server() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Ok(json_response(
                200,
                &json!({"id": 1, "description": "d", "answers": [], "image": null}),
            ))
        }));
        let use_case = FetchTest::new(Arc::clone(&client), config());

        use_case.execute().await.unwrap();
        use_case.execute().await.unwrap();

        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_fetches_are_independent() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Ok(json_response(
                200,
                &json!({"id": 9, "description": "q", "answers": ["x"], "image": null}),
            ))
        }));
        let first = FetchTest::new(Arc::clone(&client), config());
        let second = FetchTest::new(Arc::clone(&client), config());

        let (a, b) = tokio::join!(first.execute(), second.execute());
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_eq!(a, b);
        assert!(!std::ptr::eq(a.answers().as_ptr(), b.answers().as_ptr()));
        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_error_status() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Ok(json_response(500, &json!("boom")))
        }));
        let use_case = FetchTest::new(client, config());

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(ApplicationError::UnexpectedStatus { status: 500, endpoint: Endpoint::Test, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Ok(json_response(200, &json!({"id": 1, "answers": []})))
        }));
        let use_case = FetchTest::new(client, config());

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidPayload(_)))
        ));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Err(HttpClientError::ConnectionRefused {
                host: "quiz.test".to_string(),
                port: 5050,
            })
        }));
        let use_case = FetchTest::new(client, config());

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(ApplicationError::Http(HttpClientError::ConnectionRefused { port: 5050, .. }))
        ));
    }
}
