use crate::api::{AttendanceSummary, UNKNOWN_EMPLOYEE};
use std::collections::HashMap;

pub const LOAD_FAILED: &str = "Failed to load dashboard";

/// Rounded share of present days, 0 when there are no days at all.
pub fn attendance_percentage(present_days: u32, total_days: u32) -> u32 {
    if total_days == 0 {
        return 0;
    }
    (f64::from(present_days) / f64::from(total_days) * 100.0).round() as u32
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeBreakdownRow {
    pub id: String,
    pub name: String,
    pub total_days: u32,
    pub present_days: u32,
    pub absent_days: u32,
    pub percentage: u32,
}

/// Rows in server order; names resolve through `names`, falling back to
/// "Unknown" for ids no longer present in the employee list.
pub fn breakdown_rows(
    summary: &AttendanceSummary,
    names: &HashMap<String, String>,
) -> Vec<EmployeeBreakdownRow> {
    summary
        .summary_by_employee
        .iter()
        .map(|row| EmployeeBreakdownRow {
            id: row.id.clone(),
            name: names
                .get(&row.id)
                .filter(|name| !name.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string()),
            total_days: row.total_days,
            present_days: row.present_days,
            absent_days: row.absent_days,
            percentage: attendance_percentage(row.present_days, row.total_days),
        })
        .collect()
}
