use crate::{
    api::AttendanceStatus,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::SuccessMessage,
    },
    pages::attendance::{utils::status_from_select, view_model::MarkAttendanceViewModel},
};
use leptos::{ev, *};

#[component]
pub fn MarkAttendanceForm(vm: MarkAttendanceViewModel) -> impl IntoView {
    let pending = vm.mark_action.pending();
    let form = vm.form;
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit novalidate>
            <h3 class="text-lg font-medium text-fg">"Mark Attendance"</h3>
            <input
                class="w-full border border-border rounded px-3 py-2"
                type="text"
                placeholder="Employee ID"
                aria-label="Employee ID"
                required
                prop:value=move || form.with(|state| state.employee_id.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| state.employee_id = value);
                }
            />
            <input
                class="w-full border border-border rounded px-3 py-2"
                type="date"
                aria-label="Date"
                required
                prop:value=move || form.with(|state| state.date.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| state.date = value);
                }
            />
            <select
                class="w-full border border-border rounded px-3 py-2"
                aria-label="Status"
                prop:value=move || form.with(|state| state.status.to_string())
                on:change=move |ev| {
                    let status = status_from_select(&event_target_value(&ev));
                    form.update(|state| state.status = status);
                }
            >
                {AttendanceStatus::SELECTABLE
                    .into_iter()
                    .map(|status| {
                        let value = status.to_string();
                        view! {
                            <option value=value.clone() selected=move || form.with(|state| state.status == status)>
                                {value}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <Button variant=ButtonVariant::Primary disabled=pending attr:type="submit">
                {move || if pending.get() { "Marking..." } else { "Mark Attendance" }}
            </Button>
            <InlineErrorMessage error=vm.error />
            {move || vm.success.get().map(|message| view! { <SuccessMessage message=message /> })}
        </form>
    }
}
