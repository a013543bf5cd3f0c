use super::{
    components::{add_form::EmployeeForm, list::EmployeeList},
    view_model::{use_employee_form_view_model, use_employee_list_view_model},
};
use crate::state::app::{dispatch, use_app_state, AppEvent};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let (app_state, set_app_state) = use_app_state();
    let revision = create_memo(move |_| app_state.get().employees_revision);

    let form_vm = use_employee_form_view_model(Callback::new(move |_| {
        dispatch(set_app_state, AppEvent::EmployeesChanged)
    }));
    let list_vm = use_employee_list_view_model(revision.into());

    view! {
        <div class="space-y-6">
            <EmployeeForm vm=form_vm />
            <EmployeeList vm=list_vm />
        </div>
    }
}
