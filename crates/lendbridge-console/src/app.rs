/*
[INPUT]:  RenderCommands from in-flight submissions, panel selections, form edits
[OUTPUT]: AppState holding tabs, forms, and both display surfaces
[POS]:    Application state - single owner of every render target
[UPDATE]: When adding surfaces or render commands
*/

use std::collections::HashMap;

use lendbridge_adapter::ResponseSink;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::bindings::{Action, RenderTarget};
use crate::form::FormState;
use crate::render::{ListSurface, OutputSurface, render_loans};
use crate::tabs::{Panel, TabController};

/// A full overwrite of one surface.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Response { value: Value, is_error: bool },
    Loans(Option<Value>),
}

/// Forwards renders from submission tasks to the task that owns `AppState`,
/// so surfaces are only ever written from one place.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<RenderCommand>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<RenderCommand>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RenderCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, command: RenderCommand) {
        if self.tx.send(command).is_err() {
            tracing::debug!("render receiver dropped; discarding render");
        }
    }
}

impl ResponseSink for ChannelSink {
    fn render(&self, value: &Value, is_error: bool) {
        self.send(RenderCommand::Response {
            value: value.clone(),
            is_error,
        });
    }
}

impl RenderTarget for ChannelSink {
    fn render_loans(&self, loans: Option<&Value>) {
        self.send(RenderCommand::Loans(loans.cloned()));
    }
}

#[derive(Debug)]
pub struct AppState {
    pub tabs: TabController,
    pub output: OutputSurface,
    pub list: ListSurface,
    pub status_message: String,
    forms: HashMap<Panel, FormState>,
}

impl AppState {
    pub fn new(initial_panel: Panel) -> Self {
        let forms = Panel::ALL
            .into_iter()
            .map(|panel| (panel, FormState::new(panel)))
            .collect();
        Self {
            tabs: TabController::new(initial_panel),
            output: OutputSurface::default(),
            list: ListSurface::default(),
            status_message: "Ready".to_string(),
            forms,
        }
    }

    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::Response { value, is_error } => {
                self.output.render(&value, is_error);
                self.status_message = if is_error {
                    "Request failed".to_string()
                } else {
                    "Request succeeded".to_string()
                };
            }
            RenderCommand::Loans(loans) => render_loans(&mut self.list, loans.as_ref()),
        }
    }

    pub fn select_panel(&mut self, panel: Panel) {
        self.tabs.select(panel);
    }

    pub fn active_panel(&self) -> Panel {
        self.tabs.active()
    }

    pub fn active_action(&self) -> Action {
        Action::for_panel(self.active_panel())
    }

    pub fn form(&self, panel: Panel) -> Option<&FormState> {
        self.forms.get(&panel)
    }

    pub fn active_form(&self) -> Option<&FormState> {
        self.forms.get(&self.active_panel())
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        let panel = self.active_panel();
        self.forms.get_mut(&panel)
    }
}
