pub mod donor;
pub mod student;
