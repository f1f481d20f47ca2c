//! # cutout-landing
//!
//! Yew + WASM marketing site for the AI Cutout desktop app. A single landing
//! page with scroll-revealed sections, a light/dark theme, and a mobile
//! navigation drawer. Served as a static bundle by Trunk; there is no
//! backend.

pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_theme::ThemeProvider;
use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ThemeProvider>
                <Switch<Route> render={switch} />
            </ThemeProvider>
        </BrowserRouter>
    }
}
