use crate::api::{ApiClient, ApiError, Employee, NewEmployee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create_employee(&self, payload: NewEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    /// Resolves to the identifier that was deleted.
    pub async fn delete_employee(&self, id: String) -> Result<String, ApiError> {
        self.client.delete_employee(&id).await.map(|_| id)
    }
}
