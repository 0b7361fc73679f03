use payloads::responses::Post;
use yew::prelude::*;

use crate::components::PostCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub posts: Vec<Post>,
}

#[function_component]
pub fn PostList(props: &Props) -> Html {
    if props.posts.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No posts found"}
                </p>
            </div>
        };
    }

    html! {
        <div class="space-y-4">
            {for props.posts.iter().enumerate().map(|(i, post)| html! {
                <PostCard key={post_key(i, post)} post={post.clone()} />
            })}
        </div>
    }
}

/// List key for a post. The index separates posts sharing an href.
fn post_key(index: usize, post: &Post) -> String {
    format!("{index}:{}", post.href)
}
