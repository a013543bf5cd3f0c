use leptos::*;

/// Synchronous faults a view can raise while rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderFault {
    #[error("Record without an identifier ({0})")]
    MissingRecordId(&'static str),
}

/// Replaces the wrapped subtree with a fixed panel once any child renders an
/// error. Asynchronous fetch failures never reach it.
///
/// The panel stays up while the faulty child keeps rendering `Err`. Leptos
/// drops the panel if that child later renders `Ok`. Otherwise the boundary
/// only resets when it is rebuilt, which `App` does on every page change.
#[component]
pub fn PageErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback={move |errors: RwSignal<Errors>| {
            let messages: Vec<String> = errors
                .get_untracked()
                .into_iter()
                .map(|(_, err)| err.to_string())
                .collect();
            for message in &messages {
                log::error!("Render fault captured: {}", message);
            }
            view! {
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-6 rounded" role="alert">
                    <h2 class="text-lg font-semibold">"Something went wrong"</h2>
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|(_, err)| view! { <p class="text-sm mt-2">{err.to_string()}</p> })
                            .collect_view()
                    }}
                </div>
            }
        }}>
            {children()}
        </ErrorBoundary>
    }
}
