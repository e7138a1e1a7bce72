pub use sea_orm_migration::prelude::*;

mod m20250801_000001_area;
mod m20250801_000002_donor_application;
mod m20250801_000003_student_application;
mod m20250801_000004_donor;
mod m20250801_000005_student;
mod m20250801_000006_laptop;
mod m20250801_000007_motorbike;
mod m20250801_000008_component;
mod m20250801_000009_tuition_support;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_area::Migration),
            Box::new(m20250801_000002_donor_application::Migration),
            Box::new(m20250801_000003_student_application::Migration),
            Box::new(m20250801_000004_donor::Migration),
            Box::new(m20250801_000005_student::Migration),
            Box::new(m20250801_000006_laptop::Migration),
            Box::new(m20250801_000007_motorbike::Migration),
            Box::new(m20250801_000008_component::Migration),
            Box::new(m20250801_000009_tuition_support::Migration),
        ]
    }
}
