pub mod attendance_table;
pub mod badges;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod error_boundary;
pub mod layout;
