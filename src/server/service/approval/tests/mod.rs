mod decide_donor;
mod decide_student;

use givebridge_test_utils::{TestBuilder, TestContext, TestError};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new().with_core_tables().build().await
}
