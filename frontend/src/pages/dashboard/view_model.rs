use super::{
    repository::{DashboardData, DashboardRepository},
    utils::LOAD_FAILED,
};
use crate::{
    api::{ApiClient, ApiError},
    state::fetch::FetchState,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub dashboard_resource: Resource<(u32, u32), Result<DashboardData, ApiError>>,
}

impl DashboardViewModel {
    pub fn state(&self) -> FetchState<DashboardData> {
        FetchState::from_result(self.dashboard_resource.get(), LOAD_FAILED)
    }
}

/// Reloads whenever either the employee or the attendance revision moves.
pub fn use_dashboard_view_model(revisions: Signal<(u32, u32)>) -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));

    let dashboard_resource = create_resource(
        move || revisions.get(),
        move |_| {
            let repo = repository.clone();
            async move {
                let result = repo.fetch_dashboard().await;
                if let Err(err) = &result {
                    log::error!("Failed to load dashboard: {}", err);
                }
                result
            }
        },
    );

    DashboardViewModel { dashboard_resource }
}
