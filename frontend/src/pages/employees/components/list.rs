use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        error_boundary::RenderFault,
        layout::{ErrorMessage, LoadingMessage},
    },
    pages::employees::view_model::EmployeeListViewModel,
    state::fetch::FetchState,
};
use leptos::*;

#[component]
pub fn EmployeeList(vm: EmployeeListViewModel) -> impl IntoView {
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_pending = vm.delete_action.pending();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <InlineErrorMessage error=vm.delete_error />
            {move || match vm.state() {
                FetchState::Loading => view! { <LoadingMessage message="Loading employees..." /> }.into_view(),
                FetchState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                FetchState::Loaded(employees) if employees.is_empty() => view! {
                    <EmptyState title="No employees found. Add one to get started." />
                }
                .into_view(),
                FetchState::Loaded(employees) => view! {
                    <EmployeeTable employees=employees vm=vm delete_pending=delete_pending />
                }
                .into_view(),
            }}
            <ConfirmDialog
                is_open=dialog_open
                title="Delete employee"
                message="Delete this employee?"
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                destructive=true
            />
        </section>
    }
}

#[component]
fn EmployeeTable(
    employees: Vec<Employee>,
    vm: EmployeeListViewModel,
    delete_pending: ReadSignal<bool>,
) -> impl IntoView {
    let count = employees.len();
    let rows = employees
        .into_iter()
        .map(|employee| employee_row(employee, vm, delete_pending))
        .collect::<Result<Vec<View>, RenderFault>>();

    view! {
        <h2 class="text-lg font-medium text-fg">{format!("Employees ({})", count)}</h2>
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee ID"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Name"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Email"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Department"</th>
                        <th class="px-6 py-3 text-center text-xs font-medium text-fg-muted uppercase tracking-wider">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">{rows}</tbody>
            </table>
        </div>
    }
}

fn employee_row(
    employee: Employee,
    vm: EmployeeListViewModel,
    delete_pending: ReadSignal<bool>,
) -> Result<View, RenderFault> {
    if employee.id.trim().is_empty() {
        return Err(RenderFault::MissingRecordId("employee"));
    }
    let id = employee.id.clone();
    Ok(view! {
        <tr data-record-id=employee.id.clone()>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.employee_id}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.full_name}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.email}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{employee.department}</td>
            <td class="px-6 py-4 whitespace-nowrap text-center">
                <Button
                    variant=ButtonVariant::Danger
                    disabled=delete_pending
                    on_click=Callback::new(move |_| vm.request_delete(id.clone()))
                    attr:type="button"
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
    .into_view())
}
