use entity::enums::{SupportFrequency, SupportType, TuitionStatus};
use givebridge_test_utils::TestError;
use sea_orm::EntityTrait;

use super::{donor, setup};
use crate::server::service::intake::IntakeService;

/// Three pledged laptops and one photo: three rows, all carrying that photo
#[tokio::test]
async fn creates_one_row_per_pledged_unit() -> Result<(), TestError> {
    let test = setup().await?;
    let service = IntakeService::new(&test.db);

    let mut new = donor();
    new.laptop_quantity = Some(3);
    new.image_urls = vec!["https://cdn.example.org/laptops/one.jpg".to_string()];
    let created = service.create_donor(new).await.unwrap();

    let laptops = entity::prelude::Laptop::find().all(&test.db).await?;
    assert_eq!(laptops.len(), 3);
    for laptop in &laptops {
        assert_eq!(laptop.donor_id, Some(created.id));
        assert_eq!(
            laptop.image_url.as_deref(),
            Some("https://cdn.example.org/laptops/one.jpg")
        );
    }

    Ok(())
}

#[tokio::test]
async fn fans_out_across_all_pledged_categories() -> Result<(), TestError> {
    let test = setup().await?;
    let service = IntakeService::new(&test.db);

    let mut new = donor();
    new.support_types = vec![
        SupportType::Laptop,
        SupportType::Motorbike,
        SupportType::Components,
        SupportType::Tuition,
    ];
    new.laptop_quantity = Some(1);
    new.motorbike_quantity = Some(2);
    new.components_quantity = Some(3);
    new.tuition_amount = Some(5_000_000);
    new.tuition_frequency = Some(SupportFrequency::Recurring);
    let created = service.create_donor(new).await.unwrap();

    assert_eq!(
        entity::prelude::Laptop::find().all(&test.db).await?.len(),
        1
    );
    assert_eq!(
        entity::prelude::Motorbike::find().all(&test.db).await?.len(),
        2
    );
    assert_eq!(
        entity::prelude::Component::find().all(&test.db).await?.len(),
        3
    );

    let pledges = entity::prelude::TuitionSupport::find().all(&test.db).await?;
    assert_eq!(pledges.len(), 1);
    assert_eq!(pledges[0].donor_id, Some(created.id));
    assert_eq!(pledges[0].amount, 5_000_000);
    assert_eq!(pledges[0].frequency, SupportFrequency::Recurring);
    assert_eq!(pledges[0].status, TuitionStatus::Pledged);

    Ok(())
}

#[tokio::test]
async fn invalid_pledge_creates_nothing() -> Result<(), TestError> {
    let test = setup().await?;
    let service = IntakeService::new(&test.db);

    let mut new = donor();
    new.laptop_quantity = Some(0);
    let result = service.create_donor(new).await;

    assert!(result.is_err());
    assert!(entity::prelude::Donor::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::Laptop::find().all(&test.db).await?.is_empty());

    Ok(())
}
