//! Shared helpers for lendbridge-console integration tests

use lendbridge_adapter::LendingClient;
use lendbridge_console::{AppState, ChannelSink, FormBindings, Panel, RenderCommand};
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::MockServer;

pub fn bindings_for(server: &MockServer) -> FormBindings {
    FormBindings::new(LendingClient::new(&server.uri()).expect("client init"))
}

pub fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Drop the sink and fold every queued render into a fresh AppState.
pub async fn drain(
    sink: ChannelSink,
    mut rx: UnboundedReceiver<RenderCommand>,
    panel: Panel,
) -> (AppState, usize) {
    drop(sink);
    let mut app = AppState::new(panel);
    let mut count = 0;
    while let Some(command) = rx.recv().await {
        app.apply(command);
        count += 1;
    }
    (app, count)
}
