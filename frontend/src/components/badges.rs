use crate::api::AttendanceStatus;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Positive,
    Warning,
    Negative,
    Neutral,
}

impl BadgeVariant {
    pub fn for_status(status: &AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => BadgeVariant::Positive,
            AttendanceStatus::Absent => BadgeVariant::Negative,
            AttendanceStatus::Unrecognized(_) => BadgeVariant::Neutral,
        }
    }

    /// 80 and above is positive, 60 and above a warning.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            BadgeVariant::Positive
        } else if percentage >= 60 {
            BadgeVariant::Warning
        } else {
            BadgeVariant::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Positive => "positive",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Negative => "negative",
            BadgeVariant::Neutral => "neutral",
        }
    }

    fn classes(&self) -> &'static str {
        match self {
            BadgeVariant::Positive => "bg-status-success-bg text-status-success-text",
            BadgeVariant::Warning => "bg-status-warning-bg text-status-warning-text",
            BadgeVariant::Negative => "bg-status-error-bg text-status-error-text",
            BadgeVariant::Neutral => "bg-surface-muted text-fg-muted",
        }
    }
}

#[component]
fn Badge(variant: BadgeVariant, children: Children) -> impl IntoView {
    view! {
        <span
            class=format!("inline-flex px-2 py-0.5 rounded-full text-xs font-semibold {}", variant.classes())
            data-variant=variant.as_str()
        >
            {children()}
        </span>
    }
}

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let variant = BadgeVariant::for_status(&status);
    view! { <Badge variant=variant>{status.to_string()}</Badge> }
}

#[component]
pub fn PercentageBadge(percentage: u32) -> impl IntoView {
    view! {
        <Badge variant=BadgeVariant::for_percentage(percentage)>
            {format!("{}%", percentage)}
        </Badge>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn status_badge_renders_label_and_variant() {
        let html = render_to_string(move || {
            view! { <StatusBadge status=AttendanceStatus::Absent /> }
        });
        assert!(html.contains("Absent"));
        assert!(html.contains("data-variant=\"negative\""));
    }

    #[test]
    fn percentage_badge_renders_value() {
        let html = render_to_string(move || view! { <PercentageBadge percentage=70 /> });
        assert!(html.contains("70%"));
        assert!(html.contains("data-variant=\"warning\""));
    }
}
