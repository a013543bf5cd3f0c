use crate::state::app::{dispatch, use_app_state, AppEvent, Page, APP_TITLE};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (app_state, set_app_state) = use_app_state();
    let current_page = create_memo(move |_| app_state.get().page);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col gap-3 sm:flex-row sm:justify-between sm:items-center py-4">
                    <h1 class="text-xl font-semibold text-fg">{APP_TITLE}</h1>
                    <nav class="flex flex-wrap gap-2" aria-label="Main">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                let is_active = move || current_page.get() == page;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if is_active() {
                                                "px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                            } else {
                                                "px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                            }
                                        }
                                        aria-current=move || is_active().then_some("page")
                                        on:click=move |_| dispatch(set_app_state, AppEvent::SelectPage(page))
                                    >
                                        {page.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 p-6 text-sm text-fg-muted" aria-busy="true">
            <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-action-primary-bg"></div>
            <span>{message}</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            role="alert"
        >
            <p class="text-sm">"Error: " {message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
            role="status"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}
