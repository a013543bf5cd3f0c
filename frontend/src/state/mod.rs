pub mod app;
pub mod fetch;
