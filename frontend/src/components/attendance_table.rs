use crate::{
    api::Attendance,
    components::{badges::StatusBadge, error_boundary::RenderFault},
    utils::time::format_day,
};
use leptos::*;

/// Attendance rows shared by the attendance list and the filter results.
/// A record without an identifier cannot be keyed and fails the render.
#[component]
pub fn AttendanceTable(#[prop(into)] records: Signal<Vec<Attendance>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee Name"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Date"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        records
                            .get()
                            .into_iter()
                            .map(attendance_row)
                            .collect::<Result<Vec<View>, RenderFault>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn attendance_row(record: Attendance) -> Result<View, RenderFault> {
    if record.id.trim().is_empty() {
        return Err(RenderFault::MissingRecordId("attendance"));
    }
    Ok(view! {
        <tr data-record-id=record.id.clone()>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{record.employee.display_name()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{format_day(record.date)}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <StatusBadge status=record.status.clone() />
            </td>
        </tr>
    }
    .into_view())
}
