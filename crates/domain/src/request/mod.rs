//! HTTP Request domain types

mod endpoint;
mod query;
mod spec;

pub use endpoint::Endpoint;
pub use query::{QueryParam, QueryParams};
pub use spec::RequestSpec;
