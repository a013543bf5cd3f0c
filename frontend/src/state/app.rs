use leptos::*;

type AppContext = (ReadSignal<AppState>, WriteSignal<AppState>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Employees,
    Attendance,
    Filter,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Employees, Page::Attendance, Page::Filter, Page::Dashboard];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Employees => "Employees",
            Page::Attendance => "Attendance",
            Page::Filter => "Filter Records",
            Page::Dashboard => "Dashboard",
        }
    }

    pub fn document_title(&self) -> String {
        format!("{} | {}", APP_TITLE, self.label())
    }
}

pub const APP_TITLE: &str = "HRMS Lite";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    SelectPage(Page),
    EmployeesChanged,
    AttendanceChanged,
}

/// Application-wide state. Revisions only ever move forward; a change tells
/// the matching list views to refetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppState {
    pub page: Page,
    pub employees_revision: u32,
    pub attendance_revision: u32,
}

impl AppState {
    pub fn reduce(self, event: AppEvent) -> AppState {
        match event {
            AppEvent::SelectPage(page) => AppState { page, ..self },
            AppEvent::EmployeesChanged => AppState {
                employees_revision: self.employees_revision.wrapping_add(1),
                ..self
            },
            AppEvent::AttendanceChanged => AppState {
                attendance_revision: self.attendance_revision.wrapping_add(1),
                ..self
            },
        }
    }
}

pub fn provide_app_state() -> AppContext {
    let ctx = create_signal(AppState::default());
    provide_context::<AppContext>(ctx);
    ctx
}

pub fn use_app_state() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| create_signal(AppState::default()))
}

pub fn dispatch(set_state: WriteSignal<AppState>, event: AppEvent) {
    log::debug!("app event: {:?}", event);
    set_state.update(|state| *state = state.reduce(event));
}
