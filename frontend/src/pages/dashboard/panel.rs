use super::{
    components::{breakdown::EmployeeBreakdown, summary::SummaryCards},
    utils::breakdown_rows,
    view_model::{use_dashboard_view_model, DashboardViewModel},
};
use crate::{
    components::layout::{ErrorMessage, LoadingMessage},
    state::{app::use_app_state, fetch::FetchState},
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (app_state, _) = use_app_state();
    let revisions = create_memo(move |_| {
        let state = app_state.get();
        (state.employees_revision, state.attendance_revision)
    });
    let vm = use_dashboard_view_model(revisions.into());

    view! { <DashboardView vm=vm /> }
}

#[component]
fn DashboardView(vm: DashboardViewModel) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {move || match vm.state() {
                FetchState::Loading => view! { <LoadingMessage message="Loading dashboard..." /> }.into_view(),
                FetchState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                FetchState::Loaded(data) => {
                    let rows = breakdown_rows(&data.summary, &data.names);
                    view! {
                        <SummaryCards summary=data.summary />
                        <EmployeeBreakdown rows=rows />
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
