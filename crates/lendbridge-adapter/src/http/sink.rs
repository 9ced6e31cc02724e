/*
[INPUT]:  Rendered API outcomes
[OUTPUT]: Render seam implemented by whatever owns the output surface
[POS]:    HTTP layer - render hook invoked once per call
[UPDATE]: When render targets need more context per call
*/

use serde_json::Value;

/// Receives exactly one render per API call.
pub trait ResponseSink: Send + Sync {
    fn render(&self, value: &Value, is_error: bool);
}

impl<T: ResponseSink + ?Sized> ResponseSink for &T {
    fn render(&self, value: &Value, is_error: bool) {
        (**self).render(value, is_error)
    }
}

impl<T: ResponseSink + ?Sized> ResponseSink for std::sync::Arc<T> {
    fn render(&self, value: &Value, is_error: bool) {
        (**self).render(value, is_error)
    }
}
