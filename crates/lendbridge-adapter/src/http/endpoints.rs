/*
[INPUT]:  Form payloads and customer identifiers
[OUTPUT]: Rendered API outcomes and usable response data
[POS]:    HTTP layer - lending backend endpoints
[UPDATE]: When adding new endpoints or changing routes
*/

use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::http::{LendingClient, ResponseSink};
use crate::types::FormPayload;

/// Every backend route this client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    CheckEligibility,
    CreateLoan,
    ViewLoans(String),
    ViewCustomer(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register | Endpoint::CheckEligibility | Endpoint::CreateLoan => Method::POST,
            Endpoint::ViewLoans(_) | Endpoint::ViewCustomer(_) => Method::GET,
        }
    }

    /// Path segments below the base path. A customer id is always one
    /// segment, whatever characters it contains.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Register => vec!["register"],
            Endpoint::CheckEligibility => vec!["check-eligibility"],
            Endpoint::CreateLoan => vec!["create-loan"],
            Endpoint::ViewLoans(customer_id) => vec!["view-loans", customer_id.as_str()],
            Endpoint::ViewCustomer(customer_id) => vec!["view-customer", customer_id.as_str()],
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl LendingClient {
    /// Register a customer
    ///
    /// POST /register
    pub async fn register(&self, payload: &FormPayload, sink: &dyn ResponseSink) -> Option<Value> {
        self.dispatch(&Endpoint::Register, Some(payload), sink).await
    }

    /// Check loan eligibility
    ///
    /// POST /check-eligibility
    pub async fn check_eligibility(
        &self,
        payload: &FormPayload,
        sink: &dyn ResponseSink,
    ) -> Option<Value> {
        self.dispatch(&Endpoint::CheckEligibility, Some(payload), sink)
            .await
    }

    /// Create a loan
    ///
    /// POST /create-loan
    pub async fn create_loan(
        &self,
        payload: &FormPayload,
        sink: &dyn ResponseSink,
    ) -> Option<Value> {
        self.dispatch(&Endpoint::CreateLoan, Some(payload), sink).await
    }

    /// List a customer's loans
    ///
    /// GET /view-loans/{customer_id}
    pub async fn view_loans(&self, customer_id: &str, sink: &dyn ResponseSink) -> Option<Value> {
        let endpoint = Endpoint::ViewLoans(customer_id.to_string());
        self.dispatch(&endpoint, None::<&FormPayload>, sink).await
    }

    /// Fetch one customer
    ///
    /// GET /view-customer/{customer_id}
    pub async fn view_customer(
        &self,
        customer_id: &str,
        sink: &dyn ResponseSink,
    ) -> Option<Value> {
        let endpoint = Endpoint::ViewCustomer(customer_id.to_string());
        self.dispatch(&endpoint, None::<&FormPayload>, sink).await
    }
}
