pub mod donor;
pub mod student;

use entity::enums::ApplicationStatus;

/// Listing filter shared by both application tables.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    /// Substring match across full name, phone, and facebook link
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
}
