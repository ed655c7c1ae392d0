pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod paths;
pub mod reporter;
pub mod scaffold;
pub mod templates;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{PrismError, Result};
pub use models::{InitReport, Outcome, Step, Target};
pub use scaffold::{init_thoughts, ScaffoldInitializer};
