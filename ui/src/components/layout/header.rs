use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-end space-x-4 py-3">
                    {for props.children.iter()}
                    <h1 class="text-xl font-semibold text-gray-900 dark:text-white pb-2">
                        {"BetaCritic"}
                    </h1>
                </div>
            </div>
        </header>
    }
}
