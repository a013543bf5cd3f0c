use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    pages::attendance_filter::view_model::AttendanceFilterViewModel,
};
use leptos::{ev, *};

#[component]
pub fn FilterForm(vm: AttendanceFilterViewModel) -> impl IntoView {
    let pending = vm.filter_action.pending();
    let start = vm.form.start_date_signal();
    let end = vm.form.end_date_signal();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit novalidate>
            <h3 class="text-lg font-medium text-fg">"Filter Attendance by Date Range"</h3>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <label class="block text-sm text-fg-muted">
                    "Start Date"
                    <input
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg-muted">
                    "End Date"
                    <input
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="flex gap-2">
                <Button variant=ButtonVariant::Primary disabled=pending attr:type="submit">
                    {move || if pending.get() { "Filtering..." } else { "Filter" }}
                </Button>
                <Show when=move || vm.filtered.get()>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| vm.reset())
                        attr:type="button"
                    >
                        "Reset"
                    </Button>
                </Show>
            </div>
            <InlineErrorMessage error=vm.error />
        </form>
    }
}
