/*
[INPUT]:  AppState, FormBindings, render channel, and log buffer
[OUTPUT]: Ratatui-based console for the lending forms
[POS]:    TUI module for the lendbridge binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{
    LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log,
};
