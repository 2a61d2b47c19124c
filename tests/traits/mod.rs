pub mod into_outcome;
pub mod with_error;
