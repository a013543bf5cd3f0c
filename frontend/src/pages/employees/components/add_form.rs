use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    pages::employees::{utils::EmployeeFormState, view_model::EmployeeFormViewModel},
};
use leptos::{ev, *};

#[component]
pub fn EmployeeForm(vm: EmployeeFormViewModel) -> impl IntoView {
    let pending = vm.create_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit novalidate>
            <h3 class="text-lg font-medium text-fg">"Add New Employee"</h3>
            <FormInput
                form=vm.form
                placeholder="Employee ID"
                read=|form| form.employee_id.clone()
                write=|form, value| form.employee_id = value
            />
            <FormInput
                form=vm.form
                placeholder="Full Name"
                read=|form| form.full_name.clone()
                write=|form, value| form.full_name = value
            />
            <FormInput
                form=vm.form
                placeholder="Email"
                input_type="email"
                read=|form| form.email.clone()
                write=|form, value| form.email = value
            />
            <FormInput
                form=vm.form
                placeholder="Department"
                read=|form| form.department.clone()
                write=|form, value| form.department = value
            />
            <Button variant=ButtonVariant::Primary disabled=pending attr:type="submit">
                {move || if pending.get() { "Adding..." } else { "Add Employee" }}
            </Button>
            <InlineErrorMessage error=vm.error />
        </form>
    }
}

#[component]
fn FormInput(
    form: RwSignal<EmployeeFormState>,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    read: fn(&EmployeeFormState) -> String,
    write: fn(&mut EmployeeFormState, String),
) -> impl IntoView {
    view! {
        <input
            class="w-full border border-border rounded px-3 py-2"
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            aria-label=placeholder
            required
            prop:value=move || form.with(read)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|state| write(state, value));
            }
        />
    }
}
