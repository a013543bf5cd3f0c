use crate::{
    api::ApiClient,
    components::{error_boundary::PageErrorBoundary, layout::Layout},
    pages::{
        attendance::AttendancePage, attendance_filter::AttendanceFilterPage,
        dashboard::DashboardPage, employees::EmployeesPage,
    },
    state::app::{provide_app_state, Page},
};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    let (app_state, _) = provide_app_state();
    let page = create_memo(move |_| app_state.get().page);

    view! {
        <Title text=move || page.get().document_title() />
        <PageErrorBoundary>
            <Layout>
                <CurrentPage page=page.into() />
            </Layout>
        </PageErrorBoundary>
    }
}

/// Each page sits behind its own boundary, rebuilt on navigation so a
/// render fault on one page does not stick to the next.
#[component]
fn CurrentPage(page: Signal<Page>) -> impl IntoView {
    move || {
        let current = page.get();
        log::debug!("Showing page {:?}", current);
        let content = match current {
            Page::Employees => view! { <EmployeesPage /> }.into_view(),
            Page::Attendance => view! { <AttendancePage /> }.into_view(),
            Page::Filter => view! { <AttendanceFilterPage /> }.into_view(),
            Page::Dashboard => view! { <DashboardPage /> }.into_view(),
        };
        view! { <PageErrorBoundary>{content}</PageErrorBoundary> }
    }
}
