use crate::api::{ApiClient, ApiError, Attendance, MarkAttendanceRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_attendance(&self) -> Result<Vec<Attendance>, ApiError> {
        self.client.list_attendance().await
    }

    pub async fn mark_attendance(
        &self,
        payload: MarkAttendanceRequest,
    ) -> Result<Attendance, ApiError> {
        self.client.mark_attendance(&payload).await
    }
}
