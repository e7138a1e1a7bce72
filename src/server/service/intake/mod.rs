//! Form-boundary validation and composite creation flows.
//!
//! Public submissions are validated here before anything touches the store.
//! The service also owns the two composite flows: staff-entered donors that
//! fan out into inventory rows, and the public "support this student" form
//! that files a pre-filled donor application.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        application::{NewDonorApplicationDto, NewStudentApplicationDto},
        donor::NewDonorDto,
        student::RegisterSupportDto,
    },
    server::{
        data::{
            application::donor::DonorApplicationRepository,
            application::student::StudentApplicationRepository,
            inventory::{
                component::ComponentRepository, laptop::LaptopRepository,
                motorbike::MotorbikeRepository, tuition::TuitionRepository,
            },
            people::{donor::DonorRepository, student::StudentRepository},
        },
        error::{application::ApplicationError, record::RecordError, Error},
    },
};

use entity::enums::{SupportFrequency, SupportType};

/// Component rows created from a bare count carry this type until staff
/// itemize them.
const UNSPECIFIED_COMPONENT_TYPE: &str = "unspecified";

pub struct IntakeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IntakeService<'a> {
    /// Creates a new instance of [`IntakeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and files a public donor application.
    pub async fn submit_donor_application(
        &self,
        new: NewDonorApplicationDto,
    ) -> Result<entity::donor_application::Model, Error> {
        validate_phone(&new.phone)?;
        validate_pledge(
            &new.support_types,
            new.laptop_quantity,
            new.motorbike_quantity,
            new.components_quantity,
            new.tuition_amount,
        )?;

        let application = DonorApplicationRepository::new(self.db).submit(new).await?;

        tracing::info!(application_id = %application.id, "donor application submitted");

        Ok(application)
    }

    /// Validates and files a public student application.
    pub async fn submit_student_application(
        &self,
        new: NewStudentApplicationDto,
    ) -> Result<entity::student_application::Model, Error> {
        validate_phone(&new.phone)?;

        if new.difficult_situation.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "A description of the difficult situation is required".to_string(),
            )
            .into());
        }

        let application = StudentApplicationRepository::new(self.db).submit(new).await?;

        tracing::info!(application_id = %application.id, "student application submitted");

        Ok(application)
    }

    /// Creates a staff-entered donor together with its inventory rows.
    ///
    /// One `available` row is created per pledged unit in each goods
    /// category, with uploaded photos distributed round-robin, plus one
    /// tuition pledge when an amount is given.
    pub async fn create_donor(&self, new: NewDonorDto) -> Result<entity::donor::Model, Error> {
        validate_phone(&new.phone)?;
        validate_pledge(
            &new.support_types,
            new.laptop_quantity,
            new.motorbike_quantity,
            new.components_quantity,
            new.tuition_amount,
        )?;

        let donor = DonorRepository::new(self.db).create(&new).await?;
        let notes = new.support_details.as_deref();

        if let Some(quantity) = new.laptop_quantity.filter(|q| *q > 0) {
            LaptopRepository::new(self.db)
                .create_batch(Some(donor.id), quantity as u32, &new.image_urls, notes)
                .await?;
        }

        if let Some(quantity) = new.motorbike_quantity.filter(|q| *q > 0) {
            MotorbikeRepository::new(self.db)
                .create_batch(Some(donor.id), quantity as u32, &new.image_urls, notes)
                .await?;
        }

        if let Some(quantity) = new.components_quantity.filter(|q| *q > 0) {
            ComponentRepository::new(self.db)
                .create_batch(
                    Some(donor.id),
                    quantity as u32,
                    UNSPECIFIED_COMPONENT_TYPE,
                    &new.image_urls,
                    notes,
                )
                .await?;
        }

        if let Some(amount) = new.tuition_amount.filter(|a| *a > 0) {
            let frequency = new.tuition_frequency.unwrap_or(new.support_frequency);
            TuitionRepository::new(self.db)
                .create_pledge(Some(donor.id), amount, frequency, notes)
                .await?;
        }

        tracing::info!(donor_id = %donor.id, "donor created with inventory");

        Ok(donor)
    }

    /// Files a donor application offering to support a specific student.
    ///
    /// The application's support types mirror the student's outstanding
    /// needs, so review staff see exactly what the offer covers.
    pub async fn register_student_support(
        &self,
        student_id: Uuid,
        contact: RegisterSupportDto,
    ) -> Result<entity::donor_application::Model, Error> {
        validate_phone(&contact.phone)?;

        let student = StudentRepository::new(self.db)
            .get(student_id)
            .await?
            .ok_or(RecordError::StudentNotFound(student_id))?;

        let outstanding = outstanding_needs(&student);
        if outstanding.is_empty() {
            return Err(ApplicationError::Validation(
                "This student has no outstanding needs".to_string(),
            )
            .into());
        }

        let quantity_for =
            |support_type: SupportType| outstanding.contains(&support_type).then_some(1);

        let application = DonorApplicationRepository::new(self.db)
            .submit(NewDonorApplicationDto {
                full_name: contact.full_name,
                phone: contact.phone,
                address: contact.address,
                facebook_link: contact.facebook_link,
                area_id: student.area_id,
                support_types: outstanding.clone(),
                support_frequency: contact
                    .support_frequency
                    .unwrap_or(SupportFrequency::OneTime),
                support_details: Some(format!(
                    "Offer to support student {} ({})",
                    student.full_name, student.id
                )),
                laptop_quantity: quantity_for(SupportType::Laptop),
                motorbike_quantity: quantity_for(SupportType::Motorbike),
                components_quantity: quantity_for(SupportType::Components),
                tuition_amount: None,
                tuition_frequency: None,
                notes: contact.notes,
            })
            .await?;

        tracing::info!(
            application_id = %application.id,
            student_id = %student.id,
            "support offer filed for student"
        );

        Ok(application)
    }
}

/// Needs the student declared that have not been satisfied yet.
fn outstanding_needs(student: &entity::student::Model) -> Vec<SupportType> {
    let mut needs = Vec::new();

    if student.need_laptop && !student.laptop_received {
        needs.push(SupportType::Laptop);
    }
    if student.need_motorbike && !student.motorbike_received {
        needs.push(SupportType::Motorbike);
    }
    if student.need_components && !student.components_received {
        needs.push(SupportType::Components);
    }
    if student.need_tuition && !student.tuition_supported {
        needs.push(SupportType::Tuition);
    }

    needs
}

/// Phone numbers are 10 or 11 digits with no separators.
fn validate_phone(phone: &str) -> Result<(), ApplicationError> {
    let valid = (10..=11).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(ApplicationError::Validation(
            "Phone number must be 10 or 11 digits".to_string(),
        ))
    }
}

/// A pledge must name at least one category, a positive quantity for each
/// selected goods category, and a positive amount for tuition.
fn validate_pledge(
    support_types: &[SupportType],
    laptop_quantity: Option<i32>,
    motorbike_quantity: Option<i32>,
    components_quantity: Option<i32>,
    tuition_amount: Option<i64>,
) -> Result<(), ApplicationError> {
    if support_types.is_empty() {
        return Err(ApplicationError::Validation(
            "At least one support type must be selected".to_string(),
        ));
    }

    let quantity_checks = [
        (SupportType::Laptop, laptop_quantity, "laptops"),
        (SupportType::Motorbike, motorbike_quantity, "motorbikes"),
        (SupportType::Components, components_quantity, "components"),
    ];

    for (support_type, quantity, label) in quantity_checks {
        if support_types.contains(&support_type) && quantity.unwrap_or(0) < 1 {
            return Err(ApplicationError::Validation(format!(
                "A quantity of at least 1 is required for {label}"
            )));
        }
    }

    if support_types.contains(&SupportType::Tuition) && tuition_amount.unwrap_or(0) < 1 {
        return Err(ApplicationError::Validation(
            "A positive tuition amount is required".to_string(),
        ));
    }

    Ok(())
}
