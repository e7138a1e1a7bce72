pub mod api;
pub mod application;
pub mod area;
pub mod donor;
pub mod inventory;
pub mod student;
