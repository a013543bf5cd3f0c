use super::{
    components::{form::MarkAttendanceForm, list::AttendanceList},
    view_model::{use_attendance_list_view_model, use_mark_attendance_view_model},
};
use crate::state::app::{dispatch, use_app_state, AppEvent};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let (app_state, set_app_state) = use_app_state();
    let revision = create_memo(move |_| app_state.get().attendance_revision);

    let form_vm = use_mark_attendance_view_model(Callback::new(move |_| {
        dispatch(set_app_state, AppEvent::AttendanceChanged)
    }));
    let list_vm = use_attendance_list_view_model(revision.into());

    view! {
        <div class="space-y-6">
            <MarkAttendanceForm vm=form_vm />
            <AttendanceList vm=list_vm />
        </div>
    }
}
