use payloads::Medium;
use yew::prelude::*;

use super::{LABEL_CLASS, SELECT_CLASS};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Medium,
    pub on_change: Callback<Medium>,
}

#[function_component]
pub fn MediumSelect(props: &Props) -> Html {
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target = e.target_dyn_into::<web_sys::HtmlSelectElement>();
            if let Some(select) = target
                && let Ok(medium) = select.value().parse::<Medium>()
            {
                on_change.emit(medium);
            }
        })
    };

    html! {
        <div>
            <label for="medium-select" class={LABEL_CLASS}>{"Medium"}</label>
            <select id="medium-select" onchange={on_select} class={SELECT_CLASS}>
                {for Medium::ALL.into_iter().map(|medium| {
                    let value = medium.to_string();
                    html! {
                        <option
                            value={value.clone()}
                            selected={medium == props.value}
                        >
                            {value}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
