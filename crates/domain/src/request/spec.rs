//! Request specification type

use url::Url;

use super::QueryParams;
use crate::error::DomainResult;

/// A GET request against the quiz server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Endpoint URL, without the parameters in `query`
    pub url: Url,
    /// Query parameters appended to `url`
    pub query: QueryParams,
}

impl RequestSpec {
    /// Creates a GET request with no query parameters.
    #[must_use]
    pub const fn get(url: Url) -> Self {
        Self {
            url,
            query: QueryParams::new(),
        }
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Returns the URL with the encoded query parameters appended.
    ///
    /// Parameters already present in `url` are kept in front.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be encoded.
    pub fn full_url(&self) -> DomainResult<Url> {
        let mut url = self.url.clone();
        if self.query.is_empty() {
            return Ok(url);
        }

        let encoded = self.query.encode()?;
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
            _ => encoded,
        };
        url.set_query(Some(&query));
        Ok(url)
    }
}
