pub mod error;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{test_setup_with_app_tables, test_setup_with_tables, TestError, TestSetup};
}
