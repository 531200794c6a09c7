pub mod builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{participant, player, ActivityBuilder, BuiltActivity};
#[allow(unused_imports)]
pub use setup::TestSetup;
