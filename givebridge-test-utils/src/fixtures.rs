//! Fixture factories for the core entities.
//!
//! Each `insert_*` helper builds an active model with sensible defaults,
//! hands it to the caller's closure for per-test adjustments, and inserts
//! it. Tests stay short and only spell out what they care about.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use entity::enums::{
    ApplicationStatus, ItemStatus, SupportFrequency, SupportType, SupportTypeList,
};

use crate::error::TestError;

pub async fn insert_area(
    db: &DatabaseConnection,
    customize: impl FnOnce(&mut entity::area::ActiveModel),
) -> Result<entity::area::Model, TestError> {
    let now = Utc::now().naive_utc();
    let mut area = entity::area::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set("District 1".to_string()),
        description: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    customize(&mut area);

    Ok(area.insert(db).await?)
}

pub async fn insert_donor_application(
    db: &DatabaseConnection,
    customize: impl FnOnce(&mut entity::donor_application::ActiveModel),
) -> Result<entity::donor_application::Model, TestError> {
    let now = Utc::now().naive_utc();
    let mut application = entity::donor_application::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        full_name: ActiveValue::Set("Tran Van A".to_string()),
        phone: ActiveValue::Set("0912345678".to_string()),
        address: ActiveValue::Set("12 Ly Thuong Kiet".to_string()),
        facebook_link: ActiveValue::Set(None),
        area_id: ActiveValue::Set(None),
        support_types: ActiveValue::Set(SupportTypeList(vec![SupportType::Laptop])),
        support_frequency: ActiveValue::Set(SupportFrequency::OneTime),
        support_details: ActiveValue::Set(None),
        laptop_quantity: ActiveValue::Set(Some(1)),
        motorbike_quantity: ActiveValue::Set(None),
        components_quantity: ActiveValue::Set(None),
        tuition_amount: ActiveValue::Set(None),
        tuition_frequency: ActiveValue::Set(None),
        status: ActiveValue::Set(ApplicationStatus::Pending),
        rejection_reason: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        reviewed_at: ActiveValue::Set(None),
        reviewed_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    customize(&mut application);

    Ok(application.insert(db).await?)
}

pub async fn insert_student_application(
    db: &DatabaseConnection,
    customize: impl FnOnce(&mut entity::student_application::ActiveModel),
) -> Result<entity::student_application::Model, TestError> {
    let now = Utc::now().naive_utc();
    let mut application = entity::student_application::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        full_name: ActiveValue::Set("Le Thi C".to_string()),
        birth_year: ActiveValue::Set(2004),
        phone: ActiveValue::Set("0911222333".to_string()),
        address: ActiveValue::Set("45 Nguyen Trai".to_string()),
        facebook_link: ActiveValue::Set(None),
        area_id: ActiveValue::Set(None),
        academic_year: ActiveValue::Set("2025-2026".to_string()),
        difficult_situation: ActiveValue::Set("No computer at home.".to_string()),
        need_laptop: ActiveValue::Set(true),
        need_motorbike: ActiveValue::Set(false),
        need_tuition: ActiveValue::Set(false),
        need_components: ActiveValue::Set(false),
        components_details: ActiveValue::Set(None),
        status: ActiveValue::Set(ApplicationStatus::Pending),
        rejection_reason: ActiveValue::Set(None),
        verification_notes: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        reviewed_at: ActiveValue::Set(None),
        reviewed_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    customize(&mut application);

    Ok(application.insert(db).await?)
}

pub async fn insert_donor(
    db: &DatabaseConnection,
    customize: impl FnOnce(&mut entity::donor::ActiveModel),
) -> Result<entity::donor::Model, TestError> {
    let now = Utc::now().naive_utc();
    let mut donor = entity::donor::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        application_id: ActiveValue::Set(None),
        full_name: ActiveValue::Set("Tran Van A".to_string()),
        phone: ActiveValue::Set("0912345678".to_string()),
        address: ActiveValue::Set("12 Ly Thuong Kiet".to_string()),
        facebook_link: ActiveValue::Set(None),
        area_id: ActiveValue::Set(None),
        support_types: ActiveValue::Set(SupportTypeList(vec![SupportType::Laptop])),
        support_frequency: ActiveValue::Set(SupportFrequency::OneTime),
        support_details: ActiveValue::Set(None),
        laptop_quantity: ActiveValue::Set(Some(1)),
        motorbike_quantity: ActiveValue::Set(None),
        components_quantity: ActiveValue::Set(None),
        tuition_amount: ActiveValue::Set(None),
        tuition_frequency: ActiveValue::Set(None),
        support_end_date: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    customize(&mut donor);

    Ok(donor.insert(db).await?)
}

pub async fn insert_student(
    db: &DatabaseConnection,
    customize: impl FnOnce(&mut entity::student::ActiveModel),
) -> Result<entity::student::Model, TestError> {
    let now = Utc::now().naive_utc();
    let mut student = entity::student::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        application_id: ActiveValue::Set(None),
        full_name: ActiveValue::Set("Le Thi C".to_string()),
        birth_year: ActiveValue::Set(2004),
        phone: ActiveValue::Set("0911222333".to_string()),
        address: ActiveValue::Set("45 Nguyen Trai".to_string()),
        facebook_link: ActiveValue::Set(None),
        area_id: ActiveValue::Set(None),
        academic_year: ActiveValue::Set("2025-2026".to_string()),
        difficult_situation: ActiveValue::Set("No computer at home.".to_string()),
        need_laptop: ActiveValue::Set(true),
        laptop_received: ActiveValue::Set(false),
        laptop_received_date: ActiveValue::Set(None),
        need_motorbike: ActiveValue::Set(false),
        motorbike_received: ActiveValue::Set(false),
        motorbike_received_date: ActiveValue::Set(None),
        need_tuition: ActiveValue::Set(false),
        tuition_supported: ActiveValue::Set(false),
        tuition_support_start_date: ActiveValue::Set(None),
        need_components: ActiveValue::Set(false),
        components_details: ActiveValue::Set(None),
        components_received: ActiveValue::Set(false),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    customize(&mut student);

    Ok(student.insert(db).await?)
}

pub async fn insert_laptop(
    db: &DatabaseConnection,
    customize: impl FnOnce(&mut entity::laptop::ActiveModel),
) -> Result<entity::laptop::Model, TestError> {
    let now = Utc::now().naive_utc();
    let mut laptop = entity::laptop::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        donor_id: ActiveValue::Set(None),
        student_id: ActiveValue::Set(None),
        brand: ActiveValue::Set(None),
        model: ActiveValue::Set(None),
        specifications: ActiveValue::Set(None),
        condition: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        status: ActiveValue::Set(ItemStatus::Available),
        received_date: ActiveValue::Set(now),
        assigned_date: ActiveValue::Set(None),
        delivered_date: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };

    customize(&mut laptop);

    Ok(laptop.insert(db).await?)
}
