use crate::{api::ApiError, utils::time::parse_date_input};
use chrono::NaiveDate;
use leptos::*;

pub const FILTER_FAILED: &str = "Failed to filter records";
pub const MISSING_RANGE: &str = "Please select both start and end dates";

#[derive(Clone, Copy)]
pub struct FilterFormState {
    start: RwSignal<String>,
    end: RwSignal<String>,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterFormState {
    pub fn new() -> Self {
        Self {
            start: create_rw_signal(String::new()),
            end: create_rw_signal(String::new()),
        }
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start
    }

    pub fn end_date_signal(&self) -> RwSignal<String> {
        self.end
    }

    /// Both bounds, in the order entered. A start after the end is passed on
    /// unchanged.
    pub fn to_range(&self) -> Result<(NaiveDate, NaiveDate), ApiError> {
        let start = parse_date_input(&self.start.get_untracked());
        let end = parse_date_input(&self.end.get_untracked());
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(ApiError::validation(MISSING_RANGE)),
        }
    }

    pub fn clear(&self) {
        self.start.set(String::new());
        self.end.set(String::new());
    }
}
