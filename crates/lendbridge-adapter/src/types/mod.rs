/*
[INPUT]:  Form field values and backend JSON records
[OUTPUT]: Typed payloads and records with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod form;
pub mod models;

pub use form::*;
pub use models::*;
