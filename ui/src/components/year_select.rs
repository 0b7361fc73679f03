use yew::prelude::*;

use super::{LABEL_CLASS, SELECT_CLASS};
use crate::state::YEARS;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Element id prefix, e.g. "startyear"
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: i32,
    pub on_change: Callback<i32>,
}

/// Selector over the offered release years.
#[function_component]
pub fn YearSelect(props: &Props) -> Html {
    let select_id = format!("{}-select", props.id);

    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(year) = select.value().parse::<i32>() {
                on_change.emit(year);
            }
        })
    };

    html! {
        <div>
            <label for={select_id.clone()} class={LABEL_CLASS}>
                {props.label.clone()}
            </label>
            <select id={select_id} onchange={on_select} class={SELECT_CLASS}>
                {for YEARS.into_iter().map(|year| html! {
                    <option
                        value={year.to_string()}
                        selected={year == props.value}
                    >
                        {year.to_string()}
                    </option>
                })}
            </select>
        </div>
    }
}
