use crate::api::{ApiClient, ApiError, Attendance};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceFilterRepository {
    client: Rc<ApiClient>,
}

impl AttendanceFilterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>, ApiError> {
        self.client.list_attendance_in_range(start, end).await
    }
}
