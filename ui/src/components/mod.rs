pub mod filter_bar;
pub mod layout;
pub mod medium_select;
pub mod post_card;
pub mod post_list;
pub mod year_select;

pub use filter_bar::FilterBar;
pub use medium_select::MediumSelect;
pub use post_card::PostCard;
pub use post_list::PostList;
pub use year_select::YearSelect;

/// Shared styling for the filter selectors.
pub(crate) const SELECT_CLASS: &str = "px-3 py-2 border border-neutral-300 \
     dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 \
     text-neutral-900 dark:text-neutral-100 focus:outline-none \
     focus:ring-2 focus:ring-neutral-500";

pub(crate) const LABEL_CLASS: &str =
    "block text-xs font-medium text-neutral-600 dark:text-neutral-400 mb-1";
