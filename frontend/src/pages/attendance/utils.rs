use crate::{
    api::{ApiError, AttendanceStatus, MarkAttendanceRequest},
    utils::time::parse_date_input,
};

pub const LOAD_FAILED: &str = "Failed to load attendance records";
pub const MARK_FAILED: &str = "Failed to mark attendance";
pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const MARKED: &str = "Attendance marked successfully!";
/// How long the success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 3_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkAttendanceFormState {
    pub employee_id: String,
    /// Raw `<input type="date">` value.
    pub date: String,
    pub status: AttendanceStatus,
}

impl MarkAttendanceFormState {
    pub fn to_request(&self) -> Result<MarkAttendanceRequest, ApiError> {
        let employee_id = self.employee_id.trim();
        match parse_date_input(&self.date) {
            Some(date) if !employee_id.is_empty() => Ok(MarkAttendanceRequest {
                employee_id: employee_id.to_string(),
                date,
                status: self.status.clone(),
            }),
            _ => Err(ApiError::validation(MISSING_FIELDS)),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Maps a `<select>` value back to a status; only the selectable ones exist.
pub fn status_from_select(value: &str) -> AttendanceStatus {
    AttendanceStatus::SELECTABLE
        .into_iter()
        .find(|status| status.as_str() == value)
        .unwrap_or_default()
}
