use crate::api::ApiError;

/// Lifecycle of a view's remote data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    /// Maps a resource snapshot (`None` while in flight) to a view state,
    /// using `default_message` when the error carries no message.
    pub fn from_result(result: Option<Result<T, ApiError>>, default_message: &str) -> Self {
        match result {
            None => FetchState::Loading,
            Some(Ok(value)) => FetchState::Loaded(value),
            Some(Err(err)) => FetchState::Failed(err.message_or(default_message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_resource_is_loading() {
        let state: FetchState<Vec<u8>> = FetchState::from_result(None, "Failed");
        assert!(state.is_loading());
    }

    #[test]
    fn failure_without_message_uses_default() {
        let state: FetchState<Vec<u8>> = FetchState::from_result(
            Some(Err(ApiError::unparseable(Some(500)))),
            "Failed to load employees",
        );
        assert_eq!(state, FetchState::Failed("Failed to load employees".into()));
    }

    #[test]
    fn failure_keeps_server_message() {
        let state: FetchState<Vec<u8>> = FetchState::from_result(
            Some(Err(ApiError::request_failed("Failed to fetch"))),
            "Failed to load employees",
        );
        assert_eq!(state, FetchState::Failed("Failed to fetch".into()));
    }
}
