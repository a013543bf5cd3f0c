use crate::{
    components::{badges::PercentageBadge, empty_state::EmptyState, error_boundary::RenderFault},
    pages::dashboard::utils::EmployeeBreakdownRow,
};
use leptos::*;

#[component]
pub fn EmployeeBreakdown(rows: Vec<EmployeeBreakdownRow>) -> impl IntoView {
    let body = if rows.is_empty() {
        view! { <EmptyState title="No employee attendance records yet." /> }.into_view()
    } else {
        let rendered = rows
            .into_iter()
            .map(breakdown_row)
            .collect::<Result<Vec<View>, RenderFault>>();
        view! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee Name"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Total Days"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Present"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Absent"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Attendance %"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">{rendered}</tbody>
                </table>
            </div>
        }
        .into_view()
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">"Attendance Summary by Employee"</h2>
            {body}
        </section>
    }
}

fn breakdown_row(row: EmployeeBreakdownRow) -> Result<View, RenderFault> {
    if row.id.trim().is_empty() {
        return Err(RenderFault::MissingRecordId("summary"));
    }
    Ok(view! {
        <tr data-record-id=row.id>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.name}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.total_days}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.present_days}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.absent_days}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <PercentageBadge percentage=row.percentage />
            </td>
        </tr>
    }
    .into_view())
}
