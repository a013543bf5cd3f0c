use super::{
    repository::AttendanceFilterRepository,
    utils::{FilterFormState, FILTER_FAILED},
};
use crate::api::{ApiClient, ApiError, Attendance};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AttendanceFilterViewModel {
    pub form: FilterFormState,
    pub error: RwSignal<Option<String>>,
    pub records: RwSignal<Vec<Attendance>>,
    /// Set by the first successful filter and cleared only by `reset`; a
    /// later failure keeps it so Reset stays reachable.
    pub filtered: RwSignal<bool>,
    pub filter_action: Action<(NaiveDate, NaiveDate), Result<Vec<Attendance>, ApiError>>,
}

impl AttendanceFilterViewModel {
    pub fn submit(&self) {
        if self.filter_action.pending().get_untracked() {
            return;
        }
        match self.form.to_range() {
            Ok(range) => {
                self.error.set(None);
                self.filter_action.dispatch(range);
            }
            Err(err) => self.error.set(Some(err.message_or(FILTER_FAILED))),
        }
    }

    pub fn reset(&self) {
        self.form.clear();
        self.records.set(Vec::new());
        self.error.set(None);
        self.filtered.set(false);
    }
}

pub fn use_attendance_filter_view_model() -> AttendanceFilterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceFilterRepository::new_with_client(Rc::new(api));

    let form = FilterFormState::new();
    let error = create_rw_signal(None::<String>);
    let records = create_rw_signal(Vec::<Attendance>::new());
    let filtered = create_rw_signal(false);

    let filter_action = create_action(move |(start, end): &(NaiveDate, NaiveDate)| {
        let repo = repository.clone();
        let (start, end) = (*start, *end);
        async move {
            log::debug!("Filtering attendance from {} to {}", start, end);
            repo.fetch_in_range(start, end).await
        }
    });

    create_isomorphic_effect(move |_| match filter_action.value().get() {
        Some(Ok(found)) => {
            log::debug!("Filter matched {} records", found.len());
            records.set(found);
            filtered.set(true);
        }
        Some(Err(err)) => {
            log::error!("Failed to filter attendance: {}", err);
            records.set(Vec::new());
            error.set(Some(err.message_or(FILTER_FAILED)));
        }
        None => {}
    });

    AttendanceFilterViewModel {
        form,
        error,
        records,
        filtered,
        filter_action,
    }
}
