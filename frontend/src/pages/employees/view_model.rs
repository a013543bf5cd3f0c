use super::{
    repository::EmployeesRepository,
    utils::{remove_employee, EmployeeFormState, ADD_FAILED, DELETE_FAILED, LOAD_FAILED},
};
use crate::{
    api::{ApiClient, ApiError, Employee, NewEmployee},
    state::fetch::FetchState,
};
use leptos::*;
use std::rc::Rc;

fn repository_from_context() -> EmployeesRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    EmployeesRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    pub form: RwSignal<EmployeeFormState>,
    pub error: RwSignal<Option<String>>,
    pub create_action: Action<NewEmployee, Result<Employee, ApiError>>,
}

impl EmployeeFormViewModel {
    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(payload) => {
                self.error.set(None);
                self.create_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err.message_or(ADD_FAILED))),
        }
    }
}

pub fn use_employee_form_view_model(on_created: Callback<()>) -> EmployeeFormViewModel {
    let repository = repository_from_context();
    let form = create_rw_signal(EmployeeFormState::default());
    let error = create_rw_signal(None::<String>);

    let create_action = create_action(move |payload: &NewEmployee| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            log::debug!("Creating employee {}", payload.employee_id);
            repo.create_employee(payload).await
        }
    });

    create_isomorphic_effect(move |_| match create_action.value().get() {
        Some(Ok(employee)) => {
            log::debug!("Employee {} created", employee.employee_id);
            form.update(EmployeeFormState::reset);
            error.set(None);
            on_created.call(());
        }
        Some(Err(err)) => {
            log::error!("Failed to create employee: {}", err);
            error.set(Some(err.message_or(ADD_FAILED)));
        }
        None => {}
    });

    EmployeeFormViewModel {
        form,
        error,
        create_action,
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeListViewModel {
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub delete_error: RwSignal<Option<String>>,
}

impl EmployeeListViewModel {
    pub fn state(&self) -> FetchState<Vec<Employee>> {
        FetchState::from_result(self.employees_resource.get(), LOAD_FAILED)
    }

    pub fn request_delete(&self, id: String) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(id) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        self.delete_error.set(None);
        self.delete_action.dispatch(id);
    }
}

/// `revision` changes whenever the list must be fetched again.
pub fn use_employee_list_view_model(revision: Signal<u32>) -> EmployeeListViewModel {
    let repository = repository_from_context();

    let repo_for_resource = repository.clone();
    let employees_resource = create_resource(
        move || revision.get(),
        move |revision| {
            let repo = repo_for_resource.clone();
            async move {
                log::debug!("Loading employees (revision {})", revision);
                let result = repo.fetch_employees().await;
                match &result {
                    Ok(employees) => log::debug!("Loaded {} employees", employees.len()),
                    Err(err) => log::error!("Failed to load employees: {}", err),
                }
                result
            }
        },
    );

    let pending_delete = create_rw_signal(None::<String>);
    let delete_error = create_rw_signal(None::<String>);

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete_employee(id).await }
    });

    create_isomorphic_effect(move |_| match delete_action.value().get() {
        Some(Ok(id)) => {
            log::debug!("Employee {} deleted", id);
            employees_resource.update(|current| {
                if let Some(Ok(employees)) = current {
                    remove_employee(employees, &id);
                }
            });
        }
        Some(Err(err)) => {
            log::error!("Failed to delete employee: {}", err);
            delete_error.set(Some(err.message_or(DELETE_FAILED)));
        }
        None => {}
    });

    EmployeeListViewModel {
        employees_resource,
        pending_delete,
        delete_action,
        delete_error,
    }
}
