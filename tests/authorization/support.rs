#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    AUTHOR_ID, OTHER_USER_ID, REQUEST_ID, SPACE_ID, TASK_ID, authorize_query, widget_rule_table,
};
pub use harness::{AuthorizationHarness, create_catalog_harness, create_harness};
