use payloads::responses::Post;
use yew::prelude::*;

use crate::utils::time::format_release_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub post: Post,
}

/// A post rendered as a card linking to its review page.
#[function_component]
pub fn PostCard(props: &Props) -> Html {
    let post = &props.post;

    html! {
        <a
            href={post.redirect_url()}
            class="block bg-white dark:bg-neutral-800 p-6 rounded-lg \
                   shadow-md border border-neutral-200 \
                   dark:border-neutral-700 hover:border-neutral-400 \
                   dark:hover:border-neutral-500 transition-colors"
        >
            <div class="flex justify-between items-baseline space-x-4">
                <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {&post.title}
                </h3>
                <span class="text-lg font-bold text-neutral-700 dark:text-neutral-300">
                    {post.score.to_string()}
                </span>
            </div>
            <p class="text-xs text-neutral-500 dark:text-neutral-400 mt-1">
                {format_release_date(post.release_date)}
            </p>
            <p class="text-neutral-600 dark:text-neutral-400 mt-3">
                {&post.description}
            </p>
        </a>
    }
}
