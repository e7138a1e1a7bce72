//! HTTP controller endpoints for the givebridge API.
//!
//! Controllers stay thin: they decode the request, call a repository or
//! service, publish a change event on success, and shape the response.
//! Every endpoint is annotated with utoipa for OpenAPI documentation.

pub mod application;
pub mod area;
pub mod donor;
pub mod inventory;
pub mod public;
pub mod student;
pub mod upload;
