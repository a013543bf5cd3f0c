use crate::api::AttendanceSummary;
use leptos::*;

#[component]
pub fn SummaryCards(summary: AttendanceSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <Metric label="Total Records" value=summary.total_records />
            <Metric label="Present" value=summary.present_count />
            <Metric label="Absent" value=summary.absent_count />
        </div>
    }
}

#[component]
fn Metric(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-xs font-semibold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-3 text-3xl font-bold text-fg">{value.to_string()}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::render_to_string};

    #[test]
    fn renders_three_totals() {
        let html = render_to_string(move || {
            let summary = fixtures::summary(&[("65a1", 10, 7)]);
            view! { <SummaryCards summary=summary /> }
        });
        assert!(html.contains("Total Records"));
        assert!(html.contains("Present"));
        assert!(html.contains("Absent"));
        assert!(html.contains("10"));
        assert!(html.contains("7"));
    }
}
