pub mod add_form;
pub mod list;
