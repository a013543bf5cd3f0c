use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, Attendance, AttendanceSummary, MarkAttendanceRequest},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

impl ApiClient {
    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendanceRequest,
    ) -> Result<Attendance, ApiError> {
        let url = self.endpoint("/attendance").await;
        self.send_for_data(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn list_attendance(&self) -> Result<Vec<Attendance>, ApiError> {
        let url = self.endpoint("/attendance").await;
        self.send_for_list(self.http_client().get(url)).await
    }

    pub async fn list_attendance_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Attendance>, ApiError> {
        let url = self
            .endpoint(&format!(
                "/attendance/employee/{}",
                Self::encode_segment(employee_id)
            ))
            .await;
        self.send_for_list(self.http_client().get(url)).await
    }

    /// Both bounds are inclusive.
    pub async fn list_attendance_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>, ApiError> {
        let url = self.endpoint("/attendance/filter").await;
        let query = [
            ("startDate", start.format(DATE_FORMAT).to_string()),
            ("endDate", end.format(DATE_FORMAT).to_string()),
        ];
        self.send_for_list(self.http_client().get(url).query(&query))
            .await
    }

    pub async fn attendance_summary(&self) -> Result<AttendanceSummary, ApiError> {
        let url = self.endpoint("/attendance/summary").await;
        self.send_for_data(self.http_client().get(url)).await
    }
}
