pub use super::area::Entity as Area;
pub use super::component::Entity as Component;
pub use super::donor::Entity as Donor;
pub use super::donor_application::Entity as DonorApplication;
pub use super::laptop::Entity as Laptop;
pub use super::motorbike::Entity as Motorbike;
pub use super::student::Entity as Student;
pub use super::student_application::Entity as StudentApplication;
pub use super::tuition_support::Entity as TuitionSupport;
