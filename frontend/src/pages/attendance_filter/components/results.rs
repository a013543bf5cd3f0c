use crate::{
    components::{attendance_table::AttendanceTable, empty_state::EmptyState},
    pages::attendance_filter::view_model::AttendanceFilterViewModel,
};
use leptos::*;

/// Rendered only once a filter has succeeded.
#[component]
pub fn FilterResults(vm: AttendanceFilterViewModel) -> impl IntoView {
    let count = move || vm.records.with(Vec::len);

    view! {
        <Show when=move || vm.filtered.get()>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-medium text-fg">
                    {move || format!("Filtered Results ({} records)", count())}
                </h2>
                <Show
                    when={move || count() > 0}
                    fallback={|| view! { <EmptyState title="No records found for the selected date range." /> }}
                >
                    <AttendanceTable records=vm.records />
                </Show>
            </section>
        </Show>
    }
}
