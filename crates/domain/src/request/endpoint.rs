//! Quiz server endpoints

use std::fmt;

/// The server routes this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /test`: a random test.
    Test,
    /// `GET /check_answer?test_id=..&answer_id=..`: verdict for an answer.
    CheckAnswer,
    /// `GET /healthy`: liveness message.
    Health,
}

impl Endpoint {
    /// Path relative to the configured base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::CheckAnswer => "check_answer",
            Self::Health => "healthy",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
