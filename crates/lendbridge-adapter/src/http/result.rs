/*
[INPUT]:  Classified HTTP responses
[OUTPUT]: ApiResult values consumed by renderers and callers
[POS]:    HTTP layer - outcome of one API call
[UPDATE]: When the success/failure contract changes
*/

use serde_json::Value;

use crate::http::ApiFailure;

/// Outcome of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Success(Value),
    Failure(ApiFailure),
}

impl ApiResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(failure) => Some(failure),
        }
    }

    /// Usable data for the caller; `None` on any failure.
    pub fn into_data(self) -> Option<Value> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    /// Value and error flag for the output surface.
    pub fn render_parts(&self) -> (Value, bool) {
        match self {
            ApiResult::Success(data) => (data.clone(), false),
            ApiResult::Failure(failure) => (failure.render_value(), true),
        }
    }
}
