/*
[INPUT]:  Public API exports for lendbridge-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod bindings;
pub mod config;
pub mod form;
pub mod render;
pub mod tabs;

// Re-export main types for convenience
pub use app::{AppState, ChannelSink, RenderCommand};
pub use bindings::{Action, FormBindings, RenderTarget};
pub use config::ConsoleConfig;
pub use tabs::{Panel, TabController};
