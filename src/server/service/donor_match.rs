//! Duplicate-donor lookup for the public donor form.
//!
//! When someone starts a donor application, the form asks whether they have
//! given before. Matching is by exact phone or facebook link over active
//! donors only. The result is advisory: a match never blocks submission.

use sea_orm::DatabaseConnection;

use crate::server::{data::people::donor::DonorRepository, error::Error};

use entity::enums::SupportType;

/// An existing active donor matching the submitted contact keys.
#[derive(Debug, Clone)]
pub struct DonorMatch {
    pub donor: entity::donor::Model,
    /// Whether the donor's support types already include the requested
    /// category. `None` when no category was requested.
    pub supports_requested: Option<bool>,
}

pub struct DonorMatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorMatchService<'a> {
    /// Creates a new instance of [`DonorMatchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up an active donor by contact keys.
    ///
    /// Returns `None` when neither key is given or nothing matches.
    pub async fn find(
        &self,
        phone: Option<&str>,
        facebook_link: Option<&str>,
        requested_support_type: Option<SupportType>,
    ) -> Result<Option<DonorMatch>, Error> {
        let donors = DonorRepository::new(self.db);

        let Some(donor) = donors.find_active_by_contact(phone, facebook_link).await? else {
            return Ok(None);
        };

        let supports_requested =
            requested_support_type.map(|support_type| donor.support_types.contains(support_type));

        Ok(Some(DonorMatch {
            donor,
            supports_requested,
        }))
    }
}

#[cfg(test)]
mod tests {
    use entity::enums::SupportType;
    use givebridge_test_utils::{fixtures, TestBuilder, TestContext, TestError};

    use super::DonorMatchService;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::Donor)
            .build()
            .await
    }

    #[tokio::test]
    async fn reports_whether_requested_category_is_covered() -> Result<(), TestError> {
        let test = setup().await?;
        fixtures::insert_donor(&test.db, |_| {}).await?;

        let service = DonorMatchService::new(&test.db);

        let covered = service
            .find(Some("0912345678"), None, Some(SupportType::Laptop))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(covered.supports_requested, Some(true));

        let not_covered = service
            .find(Some("0912345678"), None, Some(SupportType::Motorbike))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(not_covered.supports_requested, Some(false));

        Ok(())
    }

    #[tokio::test]
    async fn no_requested_category_yields_no_flag() -> Result<(), TestError> {
        let test = setup().await?;
        fixtures::insert_donor(&test.db, |_| {}).await?;

        let service = DonorMatchService::new(&test.db);
        let matched = service
            .find(Some("0912345678"), None, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(matched.supports_requested, None);

        Ok(())
    }

    #[tokio::test]
    async fn inactive_donors_never_match() -> Result<(), TestError> {
        let test = setup().await?;
        fixtures::insert_donor(&test.db, |donor| {
            donor.is_active = sea_orm::ActiveValue::Set(false);
        })
        .await?;

        let service = DonorMatchService::new(&test.db);
        let matched = service.find(Some("0912345678"), None, None).await.unwrap();

        assert!(matched.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn missing_keys_yield_none() -> Result<(), TestError> {
        let test = setup().await?;
        fixtures::insert_donor(&test.db, |_| {}).await?;

        let service = DonorMatchService::new(&test.db);
        let matched = service.find(None, None, None).await.unwrap();

        assert!(matched.is_none());

        Ok(())
    }
}
