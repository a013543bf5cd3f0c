#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{
        Attendance, AttendanceStatus, AttendanceSummary, Employee, EmployeeAttendanceSummary,
        EmployeeRef, EmployeeSummary,
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    pub fn employee(id: &str, employee_id: &str, full_name: &str) -> Employee {
        Employee {
            id: id.into(),
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@x.com", employee_id.to_lowercase()),
            department: "Eng".into(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn employee_json(id: &str, employee_id: &str, full_name: &str) -> Value {
        json!({
            "_id": id,
            "employeeId": employee_id,
            "fullName": full_name,
            "email": format!("{}@x.com", employee_id.to_lowercase()),
            "department": "Eng"
        })
    }

    pub fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("fixture date")
    }

    pub fn attendance(id: &str, full_name: &str, date: &str, status: AttendanceStatus) -> Attendance {
        Attendance {
            id: id.into(),
            employee: EmployeeRef::Embedded(EmployeeSummary {
                id: format!("emp-{}", id),
                full_name: full_name.into(),
                ..Default::default()
            }),
            date: day(date),
            status,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn attendance_json(id: &str, employee: Value, date: &str, status: &str) -> Value {
        json!({
            "_id": id,
            "employee": employee,
            "date": date,
            "status": status
        })
    }

    pub fn summary(rows: &[(&str, u32, u32)]) -> AttendanceSummary {
        let summary_by_employee: Vec<EmployeeAttendanceSummary> = rows
            .iter()
            .map(|(id, total, present)| EmployeeAttendanceSummary {
                id: (*id).into(),
                total_days: *total,
                present_days: *present,
                absent_days: total - present,
            })
            .collect();
        AttendanceSummary {
            total_records: summary_by_employee.iter().map(|r| r.total_days as u64).sum(),
            present_count: summary_by_employee.iter().map(|r| r.present_days as u64).sum(),
            absent_count: summary_by_employee.iter().map(|r| r.absent_days as u64).sum(),
            summary_by_employee,
        }
    }
}
