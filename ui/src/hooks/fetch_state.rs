use std::rc::Rc;
use yew::prelude::*;

/// Whether data has been fetched at least once. Distinguishes "not fetched
/// yet" from "fetched but empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}

/// Loading, data and error state of a fetch hook.
///
/// Data from the last successful fetch is kept through later loads and
/// failures, so a refresh never blanks what is already shown.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchStatus<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchStatus<T> {
    /// Loading before the first response arrives.
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            is_loading: true,
            error: None,
        }
    }
}

pub enum FetchAction<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

impl<T: Clone> FetchStatus<T> {
    pub fn apply(&self, action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Started => Self {
                data: self.data.clone(),
                is_loading: true,
                error: None,
            },
            FetchAction::Succeeded(data) => Self {
                data: FetchState::Fetched(data),
                is_loading: false,
                error: None,
            },
            FetchAction::Failed(error) => Self {
                data: self.data.clone(),
                is_loading: false,
                error: Some(error),
            },
        }
    }
}

impl<T: Clone> Reducible for FetchStatus<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(data: Vec<&'static str>) -> FetchStatus<Vec<&'static str>> {
        FetchStatus::default().apply(FetchAction::Succeeded(data))
    }

    #[test]
    fn starts_loading_without_data() {
        let status = FetchStatus::<Vec<&str>>::default();
        assert!(status.is_loading);
        assert!(!status.data.is_fetched());
        assert_eq!(status.error, None);
    }

    #[test]
    fn success_replaces_data_and_stops_loading() {
        let status = fetched(vec!["a"]);
        assert!(!status.is_loading);
        assert_eq!(status.data, FetchState::Fetched(vec!["a"]));

        let status = status
            .apply(FetchAction::Started)
            .apply(FetchAction::Succeeded(vec!["b", "c"]));
        assert_eq!(status.data.as_ref(), Some(&vec!["b", "c"]));
    }

    #[test]
    fn empty_result_is_fetched() {
        let status = fetched(vec![]);
        assert!(!status.is_loading);
        assert_eq!(status.data.as_ref(), Some(&vec![]));
    }

    #[test]
    fn failure_keeps_prior_data_and_reports_error() {
        let status = fetched(vec!["a"])
            .apply(FetchAction::Started)
            .apply(FetchAction::Failed("Network error".to_string()));
        assert!(!status.is_loading);
        assert_eq!(status.data, FetchState::Fetched(vec!["a"]));
        assert_eq!(status.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn failure_before_any_data() {
        let status = FetchStatus::<Vec<&str>>::default()
            .apply(FetchAction::Failed("boom".to_string()));
        assert!(!status.is_loading);
        assert!(!status.data.is_fetched());
        assert_eq!(status.error.as_deref(), Some("boom"));
    }

    #[test]
    fn restart_clears_error() {
        let status = fetched(vec!["a"])
            .apply(FetchAction::Failed("boom".to_string()))
            .apply(FetchAction::Started);
        assert!(status.is_loading);
        assert_eq!(status.error, None);
        assert_eq!(status.data.as_ref(), Some(&vec!["a"]));
    }
}
