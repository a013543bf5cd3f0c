use crate::api::{ApiClient, ApiError, AttendanceSummary};
use futures::future::try_join;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, rc::Rc};

/// Summary totals plus the employee names needed to label the breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: AttendanceSummary,
    /// `_id` to `fullName`.
    pub names: HashMap<String, String>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches the summary and the employee list concurrently. Either failure
    /// fails the whole dashboard.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData, ApiError> {
        let (summary, employees) = try_join(
            self.client.attendance_summary(),
            self.client.list_employees(),
        )
        .await?;
        let names = employees
            .into_iter()
            .map(|employee| (employee.id, employee.full_name))
            .collect();
        Ok(DashboardData { summary, names })
    }
}
