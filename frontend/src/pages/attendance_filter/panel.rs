use super::{
    components::{form::FilterForm, results::FilterResults},
    view_model::use_attendance_filter_view_model,
};
use leptos::*;

#[component]
pub fn AttendanceFilterPage() -> impl IntoView {
    let vm = use_attendance_filter_view_model();

    view! {
        <div class="space-y-6">
            <FilterForm vm=vm />
            <FilterResults vm=vm />
        </div>
    }
}
