use crate::api::{ApiError, Employee, NewEmployee};

pub const LOAD_FAILED: &str = "Failed to load employees";
pub const ADD_FAILED: &str = "Add failed";
pub const DELETE_FAILED: &str = "Delete failed";
pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    /// Trimmed payload, or the validation error to show instead of sending.
    pub fn to_request(&self) -> Result<NewEmployee, ApiError> {
        let request = NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        };
        if [
            &request.employee_id,
            &request.full_name,
            &request.email,
            &request.department,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err(ApiError::validation(MISSING_FIELDS));
        }
        if !is_valid_email(&request.email) {
            return Err(ApiError::validation(INVALID_EMAIL));
        }
        Ok(request)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single `@` with text on both sides and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

pub fn remove_employee(employees: &mut Vec<Employee>, id: &str) {
    employees.retain(|employee| employee.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn filled() -> EmployeeFormState {
        EmployeeFormState {
            employee_id: " E1 ".into(),
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            department: "Eng ".into(),
        }
    }

    #[wasm_bindgen_test]
    fn complete_form_produces_trimmed_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.employee_id, "E1");
        assert_eq!(request.department, "Eng");
    }

    #[wasm_bindgen_test]
    fn blank_field_is_rejected_before_email_check() {
        let mut form = filled();
        form.full_name = "   ".into();
        form.email = "nope".into();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.message.as_deref(), Some(MISSING_FIELDS));
    }

    #[wasm_bindgen_test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.email = "jane.x.com".into();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.message.as_deref(), Some(INVALID_EMAIL));
    }

    #[wasm_bindgen_test]
    fn email_shapes() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("j.doe@mail.example.org"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@"));
        assert!(is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane doe@x.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[wasm_bindgen_test]
    fn reset_clears_every_field() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, EmployeeFormState::default());
    }

    #[wasm_bindgen_test]
    fn remove_employee_drops_only_matching_id() {
        let mut employees = vec![
            fixtures::employee("65a1", "E1", "Jane Doe"),
            fixtures::employee("65a2", "E2", "John Roe"),
        ];
        remove_employee(&mut employees, "65a1");
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, "65a2");
    }
}
