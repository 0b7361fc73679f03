use payloads::requests::PostsQuery;
use yew::prelude::*;

use crate::components::layout::MainLayout;
use crate::components::{FilterBar, PostList};
use crate::hooks::use_posts;
use crate::state::Filters;
use crate::utils::time::format_release_date;

/// Posts listing. Owns the filter selections and fetches whenever they
/// change.
#[function_component]
pub fn HomePage() -> Html {
    let filters = use_state(Filters::default);
    let query = filters.query();
    let posts_hook = use_posts(query.clone());

    let on_filters_change = {
        let filters = filters.clone();
        Callback::from(move |new_filters: Filters| {
            tracing::debug!(?new_filters, "filters changed");
            filters.set(new_filters);
        })
    };

    let on_retry = {
        let refetch = posts_hook.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let toolbar = html! {
        <FilterBar filters={*filters} on_change={on_filters_change} />
    };

    html! {
        <MainLayout {toolbar}>
            <div class="space-y-6">
                {range_notice(&query)}

                if posts_hook.error.is_some() && !posts_hook.is_loading {
                    <button
                        onclick={on_retry}
                        class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        {"Retry"}
                    </button>
                }

                {posts_hook.render("posts", |posts, is_loading, error| html! {
                    <div class="space-y-4">
                        if is_loading {
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                {"Refreshing..."}
                            </p>
                        }
                        if let Some(error) = error {
                            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                                <p class="text-sm text-red-700 dark:text-red-400">
                                    {format!("Failed to refresh posts: {error}")}
                                </p>
                            </div>
                        }
                        <PostList posts={posts.clone()} />
                    </div>
                })}
            </div>
        </MainLayout>
    }
}

/// Describes the release window being shown, or warns when the query would
/// be rejected by the backend.
fn range_notice(query: &PostsQuery) -> Html {
    if !query.is_valid() {
        return html! {
            <div class="p-4 rounded-md bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-200 dark:border-yellow-800">
                <p class="text-sm text-yellow-800 dark:text-yellow-300">
                    {"These filters are not accepted by the server."}
                </p>
            </div>
        };
    }

    match query.date_range() {
        Some((from, to)) => html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!(
                    "Releases from {} to {}",
                    format_release_date(from),
                    format_release_date(to)
                )}
            </p>
        },
        None => html! {},
    }
}
