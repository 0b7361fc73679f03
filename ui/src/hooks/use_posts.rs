use payloads::{requests::PostsQuery, responses::Post};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

/// Hook to fetch the posts matching a filter query. Refetches whenever the
/// query changes; nothing is cached between queries.
#[hook]
pub fn use_posts(query: PostsQuery) -> FetchHookReturn<Vec<Post>> {
    let fetch_query = query.clone();

    use_fetch(query, move || {
        let query = fetch_query.clone();
        async move {
            get_api_client().get_posts(&query).await.map_err(|e| {
                tracing::error!(?query, error = %e, "failed to fetch posts");
                e.to_string()
            })
        }
    })
}
