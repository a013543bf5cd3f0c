pub mod attendance;
pub mod attendance_filter;
pub mod dashboard;
pub mod employees;
