pub mod prelude;

pub mod area;
pub mod component;
pub mod donor;
pub mod donor_application;
pub mod enums;
pub mod laptop;
pub mod motorbike;
pub mod student;
pub mod student_application;
pub mod tuition_support;
