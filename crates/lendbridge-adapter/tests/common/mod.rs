/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for lendbridge-adapter tests

use std::sync::Mutex;

use lendbridge_adapter::{LendingClient, ResponseSink};
use serde_json::Value;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server root
pub fn client_for(server: &MockServer) -> LendingClient {
    LendingClient::new(&server.uri()).expect("client init")
}

/// Sink that records every render it receives
#[derive(Default)]
pub struct RecordingSink {
    renders: Mutex<Vec<(Value, bool)>>,
}

impl RecordingSink {
    pub fn renders(&self) -> Vec<(Value, bool)> {
        self.renders.lock().expect("renders lock").clone()
    }
}

impl ResponseSink for RecordingSink {
    fn render(&self, value: &Value, is_error: bool) {
        self.renders
            .lock()
            .expect("renders lock")
            .push((value.clone(), is_error));
    }
}
