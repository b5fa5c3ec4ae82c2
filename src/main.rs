use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod deck;
mod dom;
mod error;
mod submission;
mod uploads;
mod validation;
mod components {
    pub mod custom_design_modal;
    pub mod fade_in;
    pub mod indicators;
    pub mod loading_screen;
    pub mod navbar;
    pub mod order_modal;
    pub mod slides;
    pub mod sparkles;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use catalog::Catalog;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct RoutesProps {
    catalog: Rc<Catalog>,
}

#[function_component(Routes)]
fn routes(props: &RoutesProps) -> Html {
    let catalog = props.catalog.clone();
    html! {
        <Switch<Route> render={move |route: Route| match route {
            Route::Home => {
                info!("Rendering Home page");
                html! { <Home catalog={catalog.clone()} /> }
            }
            Route::NotFound => {
                info!("Rendering NotFound page");
                html! { <NotFound /> }
            }
        }} />
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| catalog::load().map(Rc::new), ());

    match &*catalog {
        Ok(catalog) => html! {
            <BrowserRouter>
                <Routes catalog={catalog.clone()} />
            </BrowserRouter>
        },
        Err(e) => {
            error!("catalog failed to load: {}", e);
            html! {
                <div class="load-error">
                    {"We're polishing the showroom. Please refresh in a moment."}
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
