use super::{
    repository::AttendanceRepository,
    utils::{MarkAttendanceFormState, LOAD_FAILED, MARKED, MARK_FAILED},
};
use crate::{
    api::{ApiClient, ApiError, Attendance, MarkAttendanceRequest},
    state::fetch::FetchState,
};
use leptos::*;
use std::rc::Rc;

fn repository_from_context() -> AttendanceRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AttendanceRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct MarkAttendanceViewModel {
    pub form: RwSignal<MarkAttendanceFormState>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub mark_action: Action<MarkAttendanceRequest, Result<Attendance, ApiError>>,
}

impl MarkAttendanceViewModel {
    pub fn submit(&self) {
        if self.mark_action.pending().get_untracked() {
            return;
        }
        self.success.set(None);
        match self.form.get_untracked().to_request() {
            Ok(payload) => {
                self.error.set(None);
                self.mark_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err.message_or(MARK_FAILED))),
        }
    }
}

pub fn use_mark_attendance_view_model(on_marked: Callback<()>) -> MarkAttendanceViewModel {
    let repository = repository_from_context();
    let form = create_rw_signal(MarkAttendanceFormState::default());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let mark_action = create_action(move |payload: &MarkAttendanceRequest| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            log::debug!("Marking attendance for {} on {}", payload.employee_id, payload.date);
            repo.mark_attendance(payload).await
        }
    });

    create_isomorphic_effect(move |_| match mark_action.value().get() {
        Some(Ok(record)) => {
            log::debug!("Attendance {} recorded", record.id);
            form.update(MarkAttendanceFormState::reset);
            error.set(None);
            success.set(Some(MARKED.to_string()));
            clear_later(success);
            on_marked.call(());
        }
        Some(Err(err)) => {
            log::error!("Failed to mark attendance: {}", err);
            error.set(Some(err.message_or(MARK_FAILED)));
        }
        None => {}
    });

    MarkAttendanceViewModel {
        form,
        error,
        success,
        mark_action,
    }
}

/// Fire-and-forget: the timer outlives the view, and clearing a disposed
/// signal is a no-op.
#[cfg(target_arch = "wasm32")]
fn clear_later(banner: RwSignal<Option<String>>) {
    gloo_timers::callback::Timeout::new(super::utils::SUCCESS_BANNER_MS, move || {
        banner.try_set(None);
    })
    .forget();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn clear_later(banner: RwSignal<Option<String>>) {
    spawn_local(async move {
        let delay = std::time::Duration::from_millis(super::utils::SUCCESS_BANNER_MS.into());
        tokio::time::sleep(delay).await;
        banner.try_set(None);
    });
}

#[cfg(all(not(test), not(target_arch = "wasm32")))]
fn clear_later(_banner: RwSignal<Option<String>>) {}

#[derive(Clone, Copy)]
pub struct AttendanceListViewModel {
    pub attendance_resource: Resource<u32, Result<Vec<Attendance>, ApiError>>,
}

impl AttendanceListViewModel {
    pub fn state(&self) -> FetchState<Vec<Attendance>> {
        FetchState::from_result(self.attendance_resource.get(), LOAD_FAILED)
    }
}

/// `revision` changes whenever the list must be fetched again.
pub fn use_attendance_list_view_model(revision: Signal<u32>) -> AttendanceListViewModel {
    let repository = repository_from_context();
    let attendance_resource = create_resource(
        move || revision.get(),
        move |revision| {
            let repo = repository.clone();
            async move {
                log::debug!("Loading attendance records (revision {})", revision);
                let result = repo.fetch_attendance().await;
                match &result {
                    Ok(records) => log::debug!("Loaded {} attendance records", records.len()),
                    Err(err) => log::error!("Failed to load attendance records: {}", err),
                }
                result
            }
        },
    );

    AttendanceListViewModel {
        attendance_resource,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::AttendanceStatus;
    use crate::pages::attendance::utils::MISSING_FIELDS;
    use crate::test_support::fixtures;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};
    use serde_json::json;
    use std::time::Duration;

    fn provide_client(server: &MockServer) {
        provide_context(ApiClient::new_with_base_url(server.base_url()));
    }

    fn marked_response(server: &MockServer) {
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance");
            then.status(201).json_body(json!({
                "data": fixtures::attendance_json("a1", json!("65a1"), "2024-01-05", "Absent")
            }));
        });
    }

    #[test]
    fn incomplete_form_is_rejected_locally() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            provide_client(&server);
            let vm = use_mark_attendance_view_model(Callback::new(|_| {}));

            vm.form.update(|form| form.employee_id = "E1".into());
            vm.submit();

            assert_eq!(vm.error.get_untracked().as_deref(), Some(MISSING_FIELDS));
            assert!(server.received().is_empty());
            runtime.dispose();
        });
    }

    #[test]
    fn success_resets_form_notifies_and_banner_clears_after_three_seconds() {
        with_local_runtime_async(|| async {
            tokio::time::pause();
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            marked_response(&server);
            provide_client(&server);
            let notified = create_rw_signal(0u32);
            let vm = use_mark_attendance_view_model(Callback::new(move |_| {
                notified.update(|count| *count += 1)
            }));

            vm.form.set(MarkAttendanceFormState {
                employee_id: "E1".into(),
                date: "2024-01-05".into(),
                status: AttendanceStatus::Absent,
            });
            vm.submit();
            wait_until(|| vm.success.get_untracked().is_some()).await;

            assert_eq!(vm.success.get_untracked().as_deref(), Some(MARKED));
            assert_eq!(notified.get_untracked(), 1);
            assert_eq!(vm.form.get_untracked(), MarkAttendanceFormState::default());
            assert_eq!(
                server.received()[0].body,
                Some(json!({ "employeeId": "E1", "date": "2024-01-05", "status": "Absent" }))
            );

            tokio::time::sleep(Duration::from_millis(2_900)).await;
            assert!(vm.success.get_untracked().is_some());
            tokio::time::sleep(Duration::from_millis(200)).await;
            assert!(vm.success.get_untracked().is_none());
            runtime.dispose();
        });
    }

    #[test]
    fn failure_keeps_form_and_reports_default_message() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance");
                then.status(400).json_body(json!({ "error": {} }));
            });
            provide_client(&server);
            let vm = use_mark_attendance_view_model(Callback::new(|_| {}));

            vm.form.set(MarkAttendanceFormState {
                employee_id: "E9".into(),
                date: "2024-01-05".into(),
                status: AttendanceStatus::Present,
            });
            vm.submit();
            wait_until(|| vm.error.get_untracked().is_some()).await;

            assert_eq!(vm.error.get_untracked().as_deref(), Some(MARK_FAILED));
            assert!(vm.success.get_untracked().is_none());
            assert_eq!(vm.form.get_untracked().employee_id, "E9");
            runtime.dispose();
        });
    }

    #[test]
    fn list_loads_records_and_refetches_on_revision() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance");
                then.status(200).json_body(json!({
                    "data": [fixtures::attendance_json(
                        "a1",
                        json!({ "_id": "65a1", "fullName": "Jane Doe" }),
                        "2024-01-05T00:00:00.000Z",
                        "Present"
                    )]
                }));
            });
            provide_client(&server);
            let revision = create_rw_signal(0u32);
            let vm = use_attendance_list_view_model(revision.into());

            wait_until(|| matches!(vm.state(), FetchState::Loaded(_))).await;
            let FetchState::Loaded(records) = vm.state() else {
                panic!("attendance not loaded");
            };
            assert_eq!(records[0].employee.display_name(), "Jane Doe");

            revision.set(1);
            wait_until(|| server.hits(GET, "/api/attendance") == 2).await;
            assert_eq!(server.hits(GET, "/api/attendance"), 2);
            runtime.dispose();
        });
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            marked_response(&server);
            provide_client(&server);
            let notified = create_rw_signal(0u32);
            let vm = use_mark_attendance_view_model(Callback::new(move |_| {
                notified.update(|count| *count += 1)
            }));

            vm.form.set(MarkAttendanceFormState {
                employee_id: "E1".into(),
                date: "2024-01-05".into(),
                status: AttendanceStatus::Absent,
            });
            vm.submit();
            assert!(vm.mark_action.pending().get_untracked());
            vm.submit();
            wait_until(|| notified.get_untracked() > 0).await;

            assert_eq!(server.hits(POST, "/api/attendance"), 1);
            assert_eq!(notified.get_untracked(), 1);
            runtime.dispose();
        });
    }
}
