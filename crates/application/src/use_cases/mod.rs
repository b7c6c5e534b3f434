//! Application use cases (business logic orchestration).

mod check_answer;
mod exchange;
mod fetch_test;
mod health_check;

pub use check_answer::CheckAnswer;
pub use fetch_test::FetchTest;
pub use health_check::HealthCheck;
