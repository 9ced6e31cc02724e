/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Classified API outcomes and rendered responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod endpoints;
pub mod error;
pub mod result;
pub mod sink;

pub use client::{ClientConfig, LendingClient};
pub use endpoints::Endpoint;
pub use error::{ApiFailure, LendingError, Result, SERVER_ERROR_LABEL};
pub use result::ApiResult;
pub use sink::ResponseSink;
