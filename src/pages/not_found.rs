use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::BRAND_NAME;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{BRAND_NAME}</h1>
            <p>{"This page seems to have slipped off the display tray."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"Back to the Showroom"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0f0d0a;
                        color: #f5efe0;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-family: 'Cormorant Garamond', serif;
                        font-weight: 400;
                        color: #d4af37;
                        letter-spacing: 0.15em;
                    }
                    .not-found .cta-button {
                        border: 1px solid #d4af37;
                        color: #d4af37;
                        padding: 0.9rem 2.2rem;
                        text-decoration: none;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        font-size: 0.8rem;
                    }
                "#}
            </style>
        </div>
    }
}
