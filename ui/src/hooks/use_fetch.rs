use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchAction, FetchState, FetchStatus, RequestFence, Ticket};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// This handles the common pattern of:
    /// - No data + loading: Show "Loading {context}..."
    /// - No data + error: Show error with "Error loading {context}: ..."
    /// - Has data: Call render function with (data, is_loading, error)
    ///
    /// The render function receives:
    /// - `data`: The fetched data
    /// - `is_loading`: True if a refetch is in progress
    /// - `error`: Error from a failed refetch (data from previous fetch
    ///   still shown)
    ///
    /// # Example
    ///
    /// ```ignore
    /// posts_hook.render("posts", |posts, is_loading, error| html! {
    ///     <PostList posts={posts.clone()} />
    /// })
    /// ```
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Turn a finished request into the action to apply, checked against the
/// fence once the response has arrived. `None` if a newer request was issued
/// in the meantime.
fn settle<T>(
    fence: &RequestFence,
    ticket: Ticket,
    result: Result<T, String>,
) -> Option<FetchAction<T>> {
    if !fence.is_latest(ticket) {
        tracing::debug!(?ticket, "discarding stale response");
        return None;
    }

    Some(match result {
        Ok(data) => FetchAction::Succeeded(data),
        Err(e) => FetchAction::Failed(e),
    })
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes, and provides refetch
/// capability. The fetch function captures dependencies from the closure;
/// `deps` is used only for dependency tracking.
///
/// Every request takes a ticket from a [`RequestFence`]. When requests
/// overlap, only the response to the most recently issued one is applied;
/// earlier responses are dropped whenever they arrive.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_posts(query: PostsQuery) -> FetchHookReturn<Vec<Post>> {
///     let fetch_query = query.clone();
///     use_fetch(query, move || {
///         let query = fetch_query.clone();
///         async move {
///             get_api_client()
///                 .get_posts(&query)
///                 .await
///                 .map_err(|e| e.to_string())
///         }
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let status = use_reducer(FetchStatus::<T>::default);
    let fence = use_memo((), |_| RequestFence::default());

    let refetch = {
        let dispatcher = status.dispatcher();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let dispatcher = dispatcher.clone();
            let fetch_fn = fetch_fn.clone();
            let fence = fence.clone();

            let ticket = fence.issue();
            dispatcher.dispatch(FetchAction::Started);

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;

                if let Some(action) = settle(&fence, ticket, result) {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    // Fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: status.data.clone(),
        is_loading: status.is_loading,
        error: status.error.clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<T: Clone>(
        status: FetchStatus<T>,
        action: Option<FetchAction<T>>,
    ) -> FetchStatus<T> {
        match action {
            Some(action) => status.apply(action),
            None => status,
        }
    }

    #[test]
    fn latest_response_is_applied() {
        let fence = RequestFence::default();
        let ticket = fence.issue();

        let status = apply(
            FetchStatus::default().apply(FetchAction::Started),
            settle(&fence, ticket, Ok(vec!["a"])),
        );
        assert!(!status.is_loading);
        assert_eq!(status.data, FetchState::Fetched(vec!["a"]));
    }

    #[test]
    fn stale_response_arriving_last_is_dropped() {
        let fence = RequestFence::default();
        let older = fence.issue();
        let newer = fence.issue();

        let status = apply(
            FetchStatus::default().apply(FetchAction::Started),
            settle(&fence, newer, Ok(vec!["new"])),
        );

        let stale = settle(&fence, older, Ok(vec!["old"]));
        assert!(stale.is_none());

        let status = apply(status, stale);
        assert_eq!(status.data, FetchState::Fetched(vec!["new"]));
        assert!(!status.is_loading);
    }

    #[test]
    fn stale_error_does_not_set_error() {
        let fence = RequestFence::default();
        let older = fence.issue();
        let newer = fence.issue();

        let status = apply(
            FetchStatus::default(),
            settle(&fence, newer, Ok(vec!["new"])),
        );
        let status = apply(
            status,
            settle(&fence, older, Err::<Vec<&str>, _>("boom".to_string())),
        );
        assert_eq!(status.error, None);
        assert_eq!(status.data, FetchState::Fetched(vec!["new"]));
    }

    #[test]
    fn stale_response_before_latest_keeps_loading() {
        let fence = RequestFence::default();
        let older = fence.issue();
        let newer = fence.issue();

        let status: FetchStatus<Vec<&str>> =
            FetchStatus::default().apply(FetchAction::Started);
        let status = apply(status, settle(&fence, older, Ok(vec!["old"])));
        assert!(status.is_loading);
        assert!(!status.data.is_fetched());

        let status = apply(
            status,
            settle(&fence, newer, Err::<Vec<&str>, _>("boom".to_string())),
        );
        assert!(!status.is_loading);
        assert_eq!(status.error.as_deref(), Some("boom"));
    }
}
