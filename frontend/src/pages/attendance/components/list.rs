use crate::{
    components::{
        attendance_table::AttendanceTable,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingMessage},
    },
    pages::attendance::view_model::AttendanceListViewModel,
    state::fetch::FetchState,
};
use leptos::*;

#[component]
pub fn AttendanceList(vm: AttendanceListViewModel) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            {move || match vm.state() {
                FetchState::Loading => {
                    view! { <LoadingMessage message="Loading attendance records..." /> }.into_view()
                }
                FetchState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                FetchState::Loaded(records) if records.is_empty() => view! {
                    <EmptyState title="No attendance records found. Mark attendance to get started." />
                }
                .into_view(),
                FetchState::Loaded(records) => {
                    let count = records.len();
                    view! {
                        <h2 class="text-lg font-medium text-fg">{format!("Attendance Records ({})", count)}</h2>
                        <AttendanceTable records=Signal::derive(move || records.clone()) />
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiError, Attendance, AttendanceStatus};
    use crate::pages::attendance::view_model::use_attendance_list_view_model;
    use crate::test_support::{fixtures, ssr::render_to_string};

    fn render_with(records: Option<Result<Vec<Attendance>, ApiError>>) -> String {
        render_to_string(move || {
            let vm = use_attendance_list_view_model(Signal::derive(|| 0));
            if let Some(value) = records {
                vm.attendance_resource.set(value);
            }
            view! { <AttendanceList vm=vm /> }
        })
    }

    #[test]
    fn renders_loading_then_empty_state() {
        assert!(render_with(None).contains("Loading attendance records..."));
        assert!(render_with(Some(Ok(Vec::new())))
            .contains("No attendance records found. Mark attendance to get started."));
    }

    #[test]
    fn renders_heading_and_negative_badge_for_absent() {
        let html = render_with(Some(Ok(vec![fixtures::attendance(
            "a1",
            "Jane Doe",
            "2024-01-05",
            AttendanceStatus::Absent,
        )])));
        assert!(html.contains("Attendance Records (1)"));
        assert!(html.contains("2024-01-05"));
        assert!(html.contains("Absent"));
        assert!(html.contains("data-variant=\"negative\""));
    }

    #[test]
    fn renders_default_failure_message() {
        let html = render_with(Some(Err(ApiError::unparseable(Some(500)))));
        assert!(html.contains("Failed to load attendance records"));
    }
}
