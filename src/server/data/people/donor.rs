use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::donor::{NewDonorDto, UpdateDonorDto},
    server::{
        data::contains_ci,
        error::{record::RecordError, Error},
    },
};

use entity::enums::{SupportFrequency, SupportType, SupportTypeList};

/// Listing filter for live donors.
#[derive(Debug, Clone, Default)]
pub struct DonorFilter {
    pub search: Option<String>,
    pub support_type: Option<SupportType>,
    pub support_frequency: Option<SupportFrequency>,
    pub is_active: Option<bool>,
}

pub struct DonorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorRepository<'a> {
    /// Creates a new instance of [`DonorRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a donor entered directly by staff (no source application).
    pub async fn create(&self, new: &NewDonorDto) -> Result<entity::donor::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let donor = entity::donor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            application_id: ActiveValue::Set(None),
            full_name: ActiveValue::Set(new.full_name.clone()),
            phone: ActiveValue::Set(new.phone.clone()),
            address: ActiveValue::Set(new.address.clone()),
            facebook_link: ActiveValue::Set(new.facebook_link.clone()),
            area_id: ActiveValue::Set(new.area_id),
            support_types: ActiveValue::Set(SupportTypeList(new.support_types.clone())),
            support_frequency: ActiveValue::Set(new.support_frequency),
            support_details: ActiveValue::Set(new.support_details.clone()),
            laptop_quantity: ActiveValue::Set(new.laptop_quantity),
            motorbike_quantity: ActiveValue::Set(new.motorbike_quantity),
            components_quantity: ActiveValue::Set(new.components_quantity),
            tuition_amount: ActiveValue::Set(new.tuition_amount),
            tuition_frequency: ActiveValue::Set(new.tuition_frequency),
            support_end_date: ActiveValue::Set(new.support_end_date),
            is_active: ActiveValue::Set(true),
            notes: ActiveValue::Set(new.notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        donor.insert(self.db).await
    }

    /// Promotes an approved donor application into a live donor row.
    ///
    /// Copies the applicant and pledge fields; the new donor starts active
    /// with no support end date. Callers are responsible for checking
    /// [`Self::find_by_application_id`] first to keep promotion idempotent.
    pub async fn create_from_application(
        &self,
        application: &entity::donor_application::Model,
    ) -> Result<entity::donor::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let donor = entity::donor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            application_id: ActiveValue::Set(Some(application.id)),
            full_name: ActiveValue::Set(application.full_name.clone()),
            phone: ActiveValue::Set(application.phone.clone()),
            address: ActiveValue::Set(application.address.clone()),
            facebook_link: ActiveValue::Set(application.facebook_link.clone()),
            area_id: ActiveValue::Set(application.area_id),
            support_types: ActiveValue::Set(application.support_types.clone()),
            support_frequency: ActiveValue::Set(application.support_frequency),
            support_details: ActiveValue::Set(application.support_details.clone()),
            laptop_quantity: ActiveValue::Set(application.laptop_quantity),
            motorbike_quantity: ActiveValue::Set(application.motorbike_quantity),
            components_quantity: ActiveValue::Set(application.components_quantity),
            tuition_amount: ActiveValue::Set(application.tuition_amount),
            tuition_frequency: ActiveValue::Set(application.tuition_frequency),
            support_end_date: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            notes: ActiveValue::Set(application.notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        donor.insert(self.db).await
    }

    pub async fn find_by_application_id(
        &self,
        application_id: Uuid,
    ) -> Result<Option<entity::donor::Model>, DbErr> {
        entity::prelude::Donor::find()
            .filter(entity::donor::Column::ApplicationId.eq(application_id))
            .one(self.db)
            .await
    }

    /// Finds an active donor by exact phone or facebook link.
    ///
    /// Keys are matched by equality and combined with OR. Inactive donors
    /// never match. Returns `None` when neither key is given.
    pub async fn find_active_by_contact(
        &self,
        phone: Option<&str>,
        facebook_link: Option<&str>,
    ) -> Result<Option<entity::donor::Model>, DbErr> {
        if phone.is_none() && facebook_link.is_none() {
            return Ok(None);
        }

        let contact = Condition::any()
            .add_option(phone.map(|phone| entity::donor::Column::Phone.eq(phone)))
            .add_option(
                facebook_link.map(|link| entity::donor::Column::FacebookLink.eq(link)),
            );

        entity::prelude::Donor::find()
            .filter(entity::donor::Column::IsActive.eq(true))
            .filter(contact)
            .one(self.db)
            .await
    }

    /// Lists donors newest first.
    ///
    /// The support type filter is applied in memory since the categories
    /// live in a JSON column.
    pub async fn list(&self, filter: &DonorFilter) -> Result<Vec<entity::donor::Model>, DbErr> {
        let mut query =
            entity::prelude::Donor::find().order_by_desc(entity::donor::Column::CreatedAt);

        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::donor::Column::IsActive.eq(is_active));
        }

        if let Some(frequency) = filter.support_frequency {
            query = query.filter(entity::donor::Column::SupportFrequency.eq(frequency));
        }

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::donor::Column::FullName, search))
                    .add(contains_ci(entity::donor::Column::Phone, search))
                    .add(contains_ci(entity::donor::Column::FacebookLink, search)),
            );
        }

        let donors = query.all(self.db).await?;

        Ok(match filter.support_type {
            Some(support_type) => donors
                .into_iter()
                .filter(|donor| donor.support_types.contains(support_type))
                .collect(),
            None => donors,
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::donor::Model>, DbErr> {
        entity::prelude::Donor::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to an existing donor. Absent fields are
    /// left unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateDonorDto,
    ) -> Result<entity::donor::Model, Error> {
        let donor = self
            .get(id)
            .await?
            .ok_or(RecordError::DonorNotFound(id))?;

        let mut donor = donor.into_active_model();

        if let Some(full_name) = changes.full_name {
            donor.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone) = changes.phone {
            donor.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = changes.address {
            donor.address = ActiveValue::Set(address);
        }
        if let Some(facebook_link) = changes.facebook_link {
            donor.facebook_link = ActiveValue::Set(Some(facebook_link));
        }
        if let Some(area_id) = changes.area_id {
            donor.area_id = ActiveValue::Set(Some(area_id));
        }
        if let Some(support_types) = changes.support_types {
            donor.support_types = ActiveValue::Set(SupportTypeList(support_types));
        }
        if let Some(support_frequency) = changes.support_frequency {
            donor.support_frequency = ActiveValue::Set(support_frequency);
        }
        if let Some(support_details) = changes.support_details {
            donor.support_details = ActiveValue::Set(Some(support_details));
        }
        if let Some(laptop_quantity) = changes.laptop_quantity {
            donor.laptop_quantity = ActiveValue::Set(Some(laptop_quantity));
        }
        if let Some(motorbike_quantity) = changes.motorbike_quantity {
            donor.motorbike_quantity = ActiveValue::Set(Some(motorbike_quantity));
        }
        if let Some(components_quantity) = changes.components_quantity {
            donor.components_quantity = ActiveValue::Set(Some(components_quantity));
        }
        if let Some(tuition_amount) = changes.tuition_amount {
            donor.tuition_amount = ActiveValue::Set(Some(tuition_amount));
        }
        if let Some(tuition_frequency) = changes.tuition_frequency {
            donor.tuition_frequency = ActiveValue::Set(Some(tuition_frequency));
        }
        if let Some(support_end_date) = changes.support_end_date {
            donor.support_end_date = ActiveValue::Set(Some(support_end_date));
        }
        if let Some(notes) = changes.notes {
            donor.notes = ActiveValue::Set(Some(notes));
        }
        donor.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(donor.update(self.db).await?)
    }

    pub async fn set_active(
        &self,
        id: Uuid,
        is_active: bool,
    ) -> Result<entity::donor::Model, Error> {
        let donor = self
            .get(id)
            .await?
            .ok_or(RecordError::DonorNotFound(id))?;

        let mut donor = donor.into_active_model();
        donor.is_active = ActiveValue::Set(is_active);
        donor.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(donor.update(self.db).await?)
    }

    /// Deletes a donor
    ///
    /// Returns OK regardless of the donor existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Donor::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use entity::enums::{SupportFrequency, SupportType};
    use givebridge_test_utils::{TestBuilder, TestContext, TestError};

    use crate::model::donor::NewDonorDto;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::Donor)
            .build()
            .await
    }

    fn new_donor(name: &str, phone: &str) -> NewDonorDto {
        NewDonorDto {
            full_name: name.to_string(),
            phone: phone.to_string(),
            address: "12 Ly Thuong Kiet".to_string(),
            facebook_link: None,
            area_id: None,
            support_types: vec![SupportType::Laptop],
            support_frequency: SupportFrequency::OneTime,
            support_details: None,
            laptop_quantity: Some(1),
            motorbike_quantity: None,
            components_quantity: None,
            tuition_amount: None,
            tuition_frequency: None,
            support_end_date: None,
            notes: None,
            image_urls: Vec::new(),
        }
    }

    mod find_active_by_contact_tests {
        use super::{new_donor, setup};
        use crate::server::data::people::donor::DonorRepository;

        #[tokio::test]
        async fn matches_on_phone() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            let donor = repository
                .create(&new_donor("Tran Van A", "0912345678"))
                .await
                .unwrap();

            let found = repository
                .find_active_by_contact(Some("0912345678"), None)
                .await
                .unwrap();

            assert_eq!(found.map(|d| d.id), Some(donor.id));
        }

        #[tokio::test]
        async fn matches_on_facebook_link() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            let mut new = new_donor("Tran Van A", "0912345678");
            new.facebook_link = Some("https://facebook.com/tranvana".to_string());
            let donor = repository.create(&new).await.unwrap();

            let found = repository
                .find_active_by_contact(None, Some("https://facebook.com/tranvana"))
                .await
                .unwrap();

            assert_eq!(found.map(|d| d.id), Some(donor.id));
        }

        /// Deactivated donors must not be offered as matches
        #[tokio::test]
        async fn ignores_inactive_donors() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            let donor = repository
                .create(&new_donor("Tran Van A", "0912345678"))
                .await
                .unwrap();
            repository.set_active(donor.id, false).await.unwrap();

            let found = repository
                .find_active_by_contact(Some("0912345678"), None)
                .await
                .unwrap();

            assert!(found.is_none());
        }

        #[tokio::test]
        async fn no_keys_returns_none() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            repository
                .create(&new_donor("Tran Van A", "0912345678"))
                .await
                .unwrap();

            let found = repository.find_active_by_contact(None, None).await.unwrap();

            assert!(found.is_none());
        }

        /// Partial keys are not enough, equality only
        #[tokio::test]
        async fn does_not_match_phone_prefix() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            repository
                .create(&new_donor("Tran Van A", "0912345678"))
                .await
                .unwrap();

            let found = repository
                .find_active_by_contact(Some("0912"), None)
                .await
                .unwrap();

            assert!(found.is_none());
        }
    }

    mod list_tests {
        use entity::enums::SupportType;

        use super::{new_donor, setup};
        use crate::server::data::people::donor::{DonorFilter, DonorRepository};

        #[tokio::test]
        async fn support_type_filter_checks_membership() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            repository
                .create(&new_donor("Laptop Donor", "0911111111"))
                .await
                .unwrap();

            let mut tuition = new_donor("Tuition Donor", "0922222222");
            tuition.support_types = vec![SupportType::Tuition];
            repository.create(&tuition).await.unwrap();

            let filter = DonorFilter {
                support_type: Some(SupportType::Tuition),
                ..DonorFilter::default()
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Tuition Donor");
        }

        /// Search casing must not matter regardless of the backend's LIKE
        /// collation.
        #[tokio::test]
        async fn search_is_case_insensitive() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            repository
                .create(&new_donor("Tran Van A", "0912345678"))
                .await
                .unwrap();
            repository
                .create(&new_donor("Nguyen Thi B", "0987654321"))
                .await
                .unwrap();

            let filter = DonorFilter {
                search: Some("tran".to_string()),
                ..DonorFilter::default()
            };
            let found = repository.list(&filter).await.unwrap();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].full_name, "Tran Van A");
        }
    }

    mod update_tests {
        use uuid::Uuid;

        use super::{new_donor, setup};
        use crate::{
            model::donor::UpdateDonorDto,
            server::{
                data::people::donor::DonorRepository,
                error::{record::RecordError, Error},
            },
        };

        #[tokio::test]
        async fn updates_only_provided_fields() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            let donor = repository
                .create(&new_donor("Tran Van A", "0912345678"))
                .await
                .unwrap();

            let changes = UpdateDonorDto {
                notes: Some("prefers weekend pickup".to_string()),
                ..UpdateDonorDto::default()
            };
            let updated = repository.update(donor.id, changes).await.unwrap();

            assert_eq!(updated.notes.as_deref(), Some("prefers weekend pickup"));
            assert_eq!(updated.full_name, "Tran Van A");
            assert_eq!(updated.phone, "0912345678");
        }

        #[tokio::test]
        async fn unknown_donor_fails_not_found() {
            let test = setup().await.unwrap();
            let repository = DonorRepository::new(&test.db);

            let result = repository
                .update(Uuid::new_v4(), UpdateDonorDto::default())
                .await;

            assert!(matches!(
                result,
                Err(Error::RecordError(RecordError::DonorNotFound(_)))
            ));
        }
    }
}
