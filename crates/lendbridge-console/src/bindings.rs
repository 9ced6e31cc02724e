/*
[INPUT]:  Form submissions (action + raw field values)
[OUTPUT]: One API call per submission, rendered through a RenderTarget
[POS]:    Glue layer - action dispatch table wiring forms to endpoints
[UPDATE]: When forms, routes, or list-rendering endpoints change
*/

use std::fmt;
use std::sync::Arc;

use lendbridge_adapter::{Endpoint, LendingClient, ResponseSink, serialize_form};
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::tabs::Panel;

/// A render target that also owns the loan list surface.
pub trait RenderTarget: ResponseSink {
    fn render_loans(&self, loans: Option<&Value>);
}

/// One logical submission per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Register,
    CheckEligibility,
    CreateLoan,
    ViewLoans,
    ViewCustomer,
}

impl Action {
    pub fn for_panel(panel: Panel) -> Self {
        match panel {
            Panel::Register => Action::Register,
            Panel::Eligibility => Action::CheckEligibility,
            Panel::CreateLoan => Action::CreateLoan,
            Panel::ViewLoans => Action::ViewLoans,
            Panel::ViewCustomer => Action::ViewCustomer,
        }
    }

    pub fn binding(self) -> &'static Binding {
        &BINDINGS[self as usize]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Register => "register",
            Action::CheckEligibility => "check-eligibility",
            Action::CreateLoan => "create-loan",
            Action::ViewLoans => "view-loans",
            Action::ViewCustomer => "view-customer",
        };
        f.write_str(name)
    }
}

/// How a submission becomes a request.
#[derive(Debug)]
pub enum RequestShape {
    /// Whole form serialized as the JSON body.
    Payload(Endpoint),
    /// Raw value of one field used as the route parameter; no body.
    PathParam {
        field: &'static str,
        route: fn(String) -> Endpoint,
    },
}

#[derive(Debug)]
pub struct Binding {
    pub action: Action,
    pub request: RequestShape,
    pub renders_list: bool,
}

impl Binding {
    pub fn endpoint(&self, fields: &[(String, String)]) -> Endpoint {
        match &self.request {
            RequestShape::Payload(endpoint) => endpoint.clone(),
            RequestShape::PathParam { field, route } => {
                let value = fields
                    .iter()
                    .find(|(name, _)| name == field)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default();
                route(value)
            }
        }
    }
}

/// Dispatch table, indexed by `Action`.
pub static BINDINGS: [Binding; 5] = [
    Binding {
        action: Action::Register,
        request: RequestShape::Payload(Endpoint::Register),
        renders_list: false,
    },
    Binding {
        action: Action::CheckEligibility,
        request: RequestShape::Payload(Endpoint::CheckEligibility),
        renders_list: false,
    },
    Binding {
        action: Action::CreateLoan,
        request: RequestShape::Payload(Endpoint::CreateLoan),
        renders_list: false,
    },
    Binding {
        action: Action::ViewLoans,
        request: RequestShape::PathParam {
            field: "customer_id",
            route: Endpoint::ViewLoans,
        },
        renders_list: true,
    },
    Binding {
        action: Action::ViewCustomer,
        request: RequestShape::PathParam {
            field: "customer_id",
            route: Endpoint::ViewCustomer,
        },
        renders_list: false,
    },
];

/// Runs form submissions against the backend.
#[derive(Debug, Clone)]
pub struct FormBindings {
    client: Arc<LendingClient>,
}

impl FormBindings {
    pub fn new(client: LendingClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &LendingClient {
        &self.client
    }

    /// Submit one form and render the outcome. Returns the success value.
    pub async fn submit<T>(
        &self,
        action: Action,
        fields: &[(String, String)],
        target: &T,
    ) -> Option<Value>
    where
        T: RenderTarget,
    {
        let binding = action.binding();
        let endpoint = binding.endpoint(fields);
        tracing::info!(action = %action, route = %endpoint, "submitting form");

        let data = match &binding.request {
            RequestShape::Payload(_) => {
                let payload =
                    serialize_form(fields.iter().map(|(name, raw)| (name.as_str(), raw.as_str())));
                self.client.dispatch(&endpoint, Some(&payload), target).await
            }
            RequestShape::PathParam { .. } => {
                self.client.dispatch(&endpoint, None::<&Value>, target).await
            }
        };

        if binding.renders_list {
            target.render_loans(data.as_ref());
        }
        data
    }

    /// Schedule a submission on its own task. Submissions are independent:
    /// nothing is queued, merged, or cancelled.
    pub fn spawn_submit<T>(
        &self,
        action: Action,
        fields: Vec<(String, String)>,
        target: T,
    ) -> JoinHandle<Option<Value>>
    where
        T: RenderTarget + 'static,
    {
        let bindings = self.clone();
        tokio::spawn(async move { bindings.submit(action, &fields, &target).await })
    }
}
