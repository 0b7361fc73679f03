pub mod fetch_state;
pub mod request_fence;
pub mod use_fetch;
pub mod use_posts;

pub use fetch_state::{FetchAction, FetchState, FetchStatus};
pub use request_fence::{RequestFence, Ticket};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_posts::use_posts;
