use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod carousel {
    pub mod controller;
    pub mod slider;
    #[cfg(test)]
    pub mod testing;
    pub mod timer;
    pub mod track;
}
mod interaction {
    pub mod counter;
    pub mod filter;
    pub mod form;
    pub mod lightbox;
    pub mod scroll;
}
mod components {
    pub mod anchor;
    pub mod back_to_top;
    pub mod contact_form;
    pub mod header;
    pub mod lightbox;
    pub mod portfolio;
    pub mod process;
    pub mod stats;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::header::Header;
use content::SiteContent;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, content: &Rc<SiteContent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home content={content.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());

    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={move |route: Route| switch(route, &content)} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
