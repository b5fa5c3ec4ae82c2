use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::{BRAND_NAME, LOADING_FADE_MS, LOADING_VISIBLE_MS};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Showing,
    Hiding,
    Removed,
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    /// Fired when the screen starts fading out.
    pub on_hidden: Callback<()>,
    /// Fired once the screen has left the tree.
    pub on_removed: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let phase = use_state(|| Phase::Showing);

    {
        let phase = phase.setter();
        let on_hidden = props.on_hidden.clone();
        let on_removed = props.on_removed.clone();
        use_effect_with_deps(
            move |_| {
                let hide = Timeout::new(LOADING_VISIBLE_MS, move || {
                    debug!("loading screen: hiding");
                    phase.set(Phase::Hiding);
                    on_hidden.emit(());
                    Timeout::new(LOADING_FADE_MS, move || {
                        phase.set(Phase::Removed);
                        on_removed.emit(());
                    })
                    .forget();
                });
                move || drop(hide)
            },
            (),
        );
    }

    if *phase == Phase::Removed {
        return html! {};
    }

    html! {
        <div id="loadingScreen" class={classes!("loading-screen", (*phase == Phase::Hiding).then_some("hidden"))}>
            <div class="loading-logo">{BRAND_NAME}</div>
            <div class="loading-bar">
                <div class="loading-bar-fill"></div>
            </div>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0f0d0a;
                        transition: opacity 0.8s ease, visibility 0.8s ease;
                    }
                    .loading-screen.hidden {
                        opacity: 0;
                        visibility: hidden;
                    }
                    .loading-logo {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 2.5rem;
                        letter-spacing: 0.2em;
                        color: #d4af37;
                    }
                    .loading-bar {
                        width: 180px;
                        height: 2px;
                        background: rgba(212, 175, 55, 0.2);
                        overflow: hidden;
                    }
                    .loading-bar-fill {
                        height: 100%;
                        width: 0;
                        background: #d4af37;
                        animation: loadFill 2s ease forwards;
                    }
                    @keyframes loadFill { to { width: 100%; } }
                "#}
            </style>
        </div>
    }
}
