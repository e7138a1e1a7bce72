mod upload_image;

pub use crate::TestSetupExt;
pub use givebridge_test_utils::{TestBuilder, TestError};
