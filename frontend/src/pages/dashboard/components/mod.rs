pub mod breakdown;
pub mod summary;
