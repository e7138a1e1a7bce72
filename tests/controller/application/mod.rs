mod decide_donor_application;

pub use crate::TestSetupExt;
pub use givebridge_test_utils::{fixtures, TestBuilder, TestError};
