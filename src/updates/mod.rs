//! Package-manager update flow.

pub mod brew;

pub use brew::{check_and_update, UpdateOutcome};
