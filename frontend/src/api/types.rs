use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success bodies are always wrapped as `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Employee fields embedded in an attendance record when the endpoint
/// populates the reference. Every field may be missing, `null` or of the
/// wrong type; such fields read as empty so the row still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub department: String,
}

mod lenient_text {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings pass through and numbers are printed. Anything else is empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            _ => String::new(),
        })
    }
}

/// How an attendance record points at its employee. Endpoints that populate
/// the reference send an object, the others a bare identifier. Any other
/// shape is kept as `Other` and shown as "Unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeRef {
    ById(String),
    Embedded(EmployeeSummary),
    #[default]
    Missing,
    Other(Value),
}

impl EmployeeRef {
    pub fn display_name(&self) -> String {
        match self {
            EmployeeRef::ById(id) => id.clone(),
            EmployeeRef::Embedded(summary) => [
                summary.full_name.as_str(),
                summary.employee_id.as_str(),
                summary.id.as_str(),
            ]
            .into_iter()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(UNKNOWN_EMPLOYEE)
            .to_string(),
            EmployeeRef::Missing | EmployeeRef::Other(_) => UNKNOWN_EMPLOYEE.to_string(),
        }
    }
}

pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    /// A value outside the two the server is supposed to send.
    Unrecognized(String),
}

impl AttendanceStatus {
    pub const SELECTABLE: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Present" => AttendanceStatus::Present,
            "Absent" => AttendanceStatus::Absent,
            _ => AttendanceStatus::Unrecognized(value),
        }
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub employee: EmployeeRef,
    #[serde(deserialize_with = "calendar_day::deserialize")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[serde(default)]
    pub total_records: u64,
    #[serde(default)]
    pub present_count: u64,
    #[serde(default)]
    pub absent_count: u64,
    #[serde(default)]
    pub summary_by_employee: Vec<EmployeeAttendanceSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendanceSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub absent_days: u32,
}

/// Attendance dates arrive either as `YYYY-MM-DD` or as a full ISO timestamp
/// at midnight UTC. Only the calendar day is kept.
mod calendar_day {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let day = raw.trim().get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

pub use calendar_day::parse as parse_calendar_day;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    /// The request never produced a response.
    Network,
    /// Non-success status with a JSON body.
    Server,
    /// A body that could not be read as JSON or as the expected envelope.
    Unparseable,
    /// Rejected client-side before any request was sent.
    Validation,
}

/// The single error shape every view sees. `message` is the normalized,
/// human-readable text when one could be extracted; `details` keeps the
/// server body verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("request failed"))]
pub struct ApiError {
    pub message: Option<String>,
    pub kind: ApiErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            message: Some(msg.into()),
            kind: ApiErrorKind::Validation,
            status: None,
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            message: Some(msg.into()),
            kind: ApiErrorKind::Network,
            status: None,
            details: None,
        }
    }

    pub fn unparseable(status: Option<u16>) -> Self {
        Self {
            message: None,
            kind: ApiErrorKind::Unparseable,
            status,
            details: None,
        }
    }

    /// Normalizes a non-success response body: `error.message`, then a
    /// top-level `message`, then nothing.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let Ok(details) = serde_json::from_str::<Value>(body) else {
            return Self::unparseable(Some(status));
        };
        let message = extract_message(&details);
        Self {
            message,
            kind: ApiErrorKind::Server,
            status: Some(status),
            details: Some(details),
        }
    }

    pub fn message_or(&self, default: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

fn extract_message(body: &Value) -> Option<String> {
    let non_empty = |value: Option<&Value>| {
        value
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
    };
    non_empty(body.get("error").and_then(|error| error.get("message")))
        .or_else(|| non_empty(body.get("message")))
}
