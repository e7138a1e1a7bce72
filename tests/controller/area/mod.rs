mod delete_area;

pub use crate::TestSetupExt;
pub use givebridge_test_utils::{fixtures, TestBuilder, TestError};
