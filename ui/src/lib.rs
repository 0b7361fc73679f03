use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;
pub mod utils;

use components::layout::MainLayout;
use pages::{HomePage, NotFoundPage};

/// Backend used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn get_api_client() -> APIClient {
    APIClient {
        address: backend_url().to_string(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! {
            <MainLayout>
                <NotFoundPage />
            </MainLayout>
        },
    }
}
