//! Closed enums shared across tables.
//!
//! Every status and category stored as a loosely-typed string in the hosted
//! schema is represented here as a single closed enum so labels and
//! transitions are defined once and consumed everywhere.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of a donor or student application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Category of support a donor offers or a student needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    Laptop,
    Motorbike,
    Components,
    Tuition,
}

impl SupportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laptop => "laptop",
            Self::Motorbike => "motorbike",
            Self::Components => "components",
            Self::Tuition => "tuition",
        }
    }
}

/// JSON-array column holding the support categories a donor covers.
///
/// Stored as JSON rather than a native array so the same entity runs on both
/// the Postgres production backend and the SQLite test backend.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct SupportTypeList(pub Vec<SupportType>);

impl SupportTypeList {
    pub fn contains(&self, support_type: SupportType) -> bool {
        self.0.contains(&support_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How often a donor gives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum SupportFrequency {
    #[sea_orm(string_value = "one_time")]
    OneTime,
    #[sea_orm(string_value = "recurring")]
    Recurring,
}

/// Lifecycle of a donated physical item (laptop, motorbike, component).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "assigned")]
    Assigned,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "needs_repair")]
    NeedsRepair,
}

/// Lifecycle of a tuition pledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum TuitionStatus {
    #[sea_orm(string_value = "pledged")]
    Pledged,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}
