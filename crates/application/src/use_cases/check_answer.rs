//! Check answer use case.

use std::sync::Arc;

use drivetest_domain::{
    AnswerCheck, AnswerSubmission, ClientConfig, Identifier, request::Endpoint,
    request::RequestSpec,
};
use tracing::info;

use super::exchange::get_json;
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Use case for asking the server whether an answer is right.
///
/// The verdict is returned to the caller; how it is shown is up to the
/// presentation layer.
pub struct CheckAnswer<C: HttpClient> {
    client: Arc<C>,
    config: ClientConfig,
}

impl<C: HttpClient> CheckAnswer<C> {
    /// Creates a new `CheckAnswer` use case.
    pub const fn new(client: Arc<C>, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Submits `answer_id` for `test_id`.
    ///
    /// # Errors
    ///
    /// See [`CheckAnswer::execute`].
    pub async fn check(
        &self,
        test_id: impl Into<Identifier>,
        answer_id: impl Into<Identifier>,
    ) -> ApplicationResult<AnswerCheck> {
        self.execute(&AnswerSubmission::new(test_id, answer_id))
            .await
    }

    /// Sends `GET /check_answer?test_id=..&answer_id=..` and returns the verdict.
    ///
    /// The request URL is fully built before the client is called, so an
    /// invalid base URL fails without any network activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the transport fails,
    /// the server answers with a non-2xx status, or the body is not JSON.
    pub async fn execute(&self, submission: &AnswerSubmission) -> ApplicationResult<AnswerCheck> {
        let url = self.config.endpoint(Endpoint::CheckAnswer)?;
        let request = RequestSpec::get(url).with_query(submission.to_query());

        let body = get_json(self.client.as_ref(), Endpoint::CheckAnswer, request).await?;
        let check = AnswerCheck::new(body);

        info!(
            test_id = %submission.test_id,
            answer_id = %submission.answer_id,
            correct = ?check.is_correct(),
            "checked answer"
        );
        Ok(check)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::testing::{MockHttpClient, json_response};
    use drivetest_domain::DomainError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn verdict_client() -> Arc<MockHttpClient> {
        Arc::new(MockHttpClient::respond_with(|request| {
            let correct = request.query.get("answer_id") == Some("2");
            let body = if correct {
                json!({"description": "The answer is correct", "scores": 5})
            } else {
                json!({"description": "The answer is incorrect", "scores": 0})
            };
            Ok(json_response(200, &body))
        }))
    }

    #[tokio::test]
    async fn test_query_carries_both_identifiers() {
        let client = verdict_client();
        let use_case = CheckAnswer::new(Arc::clone(&client), ClientConfig::new("https://quiz.test"));

        use_case.check(1_i64, 2_i64).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let url = requests[0].full_url().unwrap();
        assert_eq!(url.path(), "/check_answer");
        let query = url.query().unwrap();
        assert!(query.split('&').any(|pair| pair == "test_id=1"));
        assert!(query.split('&').any(|pair| pair == "answer_id=2"));
    }

    #[tokio::test]
    async fn test_verdict_is_returned() {
        let use_case = CheckAnswer::new(verdict_client(), ClientConfig::new("https://quiz.test"));

        let right = use_case.check(1_i64, 2_i64).await.unwrap();
        let wrong = use_case.check(1_i64, 3_i64).await.unwrap();

        assert_eq!(right.is_correct(), Some(true));
        assert_eq!(right.scores(), Some(5));
        assert_eq!(wrong.is_correct(), Some(false));
        assert_eq!(wrong.description(), Some("The answer is incorrect"));
    }

    #[tokio::test]
    async fn test_textual_identifiers_are_encoded() {
        let client = verdict_client();
        let use_case = CheckAnswer::new(Arc::clone(&client), ClientConfig::new("https://quiz.test"));

        use_case.check("t 1", "a&b").await.unwrap();

        let url = client.requests()[0].full_url().unwrap();
        assert_eq!(url.query(), Some("test_id=t+1&answer_id=a%26b"));
    }

    #[tokio::test]
    async fn test_fetched_numeric_ids_are_echoed_verbatim() {
        let client = verdict_client();
        let use_case = CheckAnswer::new(Arc::clone(&client), ClientConfig::new("https://quiz.test"));
        let test_id: Identifier = serde_json::from_value(json!(18_446_744_073_709_551_615_u64)).unwrap();
        let answer_id: Identifier = serde_json::from_value(json!(2.0)).unwrap();

        use_case.check(test_id, answer_id).await.unwrap();

        let url = client.requests()[0].full_url().unwrap();
        assert_eq!(
            url.query(),
            Some("test_id=18446744073709551615&answer_id=2.0")
        );
    }

    #[tokio::test]
    async fn test_unbuildable_request_fails_before_network() {
        let client = verdict_client();
        let use_case = CheckAnswer::new(Arc::clone(&client), ClientConfig::new("data:text/plain,quiz"));

        let result = use_case.check(1_i64, 2_i64).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidUrl(_)))
        ));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_verdict() {
        let client = Arc::new(MockHttpClient::respond_with(|_| {
            Ok(drivetest_domain::response::ResponseSpec {
                status: 200,
                body: b"correct!".to_vec(),
                ..Default::default()
            })
        }));
        let use_case = CheckAnswer::new(client, ClientConfig::new("https://quiz.test"));

        let result = use_case.check(1_i64, 2_i64).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidPayload(_)))
        ));
    }
}
