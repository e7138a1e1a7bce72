mod create_donor;

use entity::enums::{SupportFrequency, SupportType};
use givebridge_test_utils::{TestBuilder, TestContext, TestError};

use crate::model::{application::NewDonorApplicationDto, donor::NewDonorDto};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new().with_core_tables().build().await
}

fn donor_application() -> NewDonorApplicationDto {
    NewDonorApplicationDto {
        full_name: "Tran Van A".to_string(),
        phone: "0912345678".to_string(),
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
        notes: None,
    }
}

fn donor() -> NewDonorDto {
    NewDonorDto {
        full_name: "Tran Van A".to_string(),
        phone: "0912345678".to_string(),
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
