use payloads::Medium;
use yew::prelude::*;

use crate::components::{MediumSelect, YearSelect};
use crate::state::Filters;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: Filters,
    pub on_change: Callback<Filters>,
}

/// The medium, start year and end year selectors.
#[function_component]
pub fn FilterBar(props: &Props) -> Html {
    let filters = props.filters;

    let on_medium_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |medium: Medium| {
            on_change.emit(filters.with_medium(medium));
        })
    };

    let on_start_year_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |year: i32| {
            on_change.emit(filters.with_start_year(year));
        })
    };

    let on_end_year_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |year: i32| {
            on_change.emit(filters.with_end_year(year));
        })
    };

    html! {
        <div class="flex items-end space-x-4">
            <MediumSelect value={filters.medium} on_change={on_medium_change} />
            <YearSelect
                id="startyear"
                label="Start Year"
                value={filters.start_year}
                on_change={on_start_year_change}
            />
            <YearSelect
                id="endyear"
                label="End Year"
                value={filters.end_year}
                on_change={on_end_year_change}
            />
        </div>
    }
}
