//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP controllers and the repositories: the
//! approval service drives the application-to-record promotion workflow,
//! donor matching answers public duplicate-donor lookups, and the intake
//! service validates public submissions and runs composite creation flows.

pub mod approval;
pub mod donor_match;
pub mod intake;
