use super::{
    client::ApiClient,
    types::{ApiError, Employee, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_for_list(self.http_client().get(url)).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_for_data(self.http_client().post(url).json(payload))
            .await
    }

    /// `id` is the server identifier (`_id`), not the business employee id.
    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", Self::encode_segment(id)))
            .await;
        self.send_without_data(self.http_client().delete(url)).await
    }
}
