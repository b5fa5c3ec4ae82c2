use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::BRAND_NAME;

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub entries: Vec<NavEntry>,
    pub current: usize,
    pub on_select: Callback<usize>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps {
        entries,
        current,
        on_select,
    } = props;
    let menu_open = use_state(|| false);
    let menu_area = use_node_ref();

    {
        let menu_open = menu_open.clone();
        use_click_away(menu_area.clone(), move |_: Event| {
            menu_open.set(false);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let on_logo = {
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(0);
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*current > 0).then_some("scrolled"))}>
            <a href="#home" class="nav-logo" onclick={on_logo}>{BRAND_NAME}</a>
            <div class="nav-menu-area" ref={menu_area}>
                <button
                    id="hamburger"
                    class={classes!("hamburger", (*menu_open).then_some("active"))}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for entries.iter().enumerate().map(|(index, entry)| {
                        let onclick = {
                            let on_select = on_select.clone();
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(index);
                                menu_open.set(false);
                            })
                        };
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", entry.id)}
                                    class={classes!("nav-link", (index == *current).then_some("active"))}
                                    data-slide={index.to_string()}
                                    {onclick}
                                >
                                    {&entry.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem 3rem;
                        transition: background 0.4s ease, padding 0.4s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(15, 13, 10, 0.92);
                        backdrop-filter: blur(10px);
                        padding: 1rem 3rem;
                    }
                    .nav-logo {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 1.6rem;
                        letter-spacing: 0.15em;
                        color: #d4af37;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.75);
                        text-decoration: none;
                        font-size: 0.85rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .nav-link.active, .nav-link:hover {
                        color: #d4af37;
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #d4af37;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .hamburger.active span:nth-child(2) { opacity: 0; }
                    .hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    @media (max-width: 900px) {
                        .navbar, .navbar.scrolled { padding: 1rem 1.5rem; }
                        .hamburger { display: block; }
                        .nav-menu {
                            position: fixed;
                            top: 0;
                            right: -100%;
                            height: 100vh;
                            width: 70%;
                            flex-direction: column;
                            justify-content: center;
                            padding: 2rem;
                            background: #0f0d0a;
                            transition: right 0.4s ease;
                        }
                        .nav-menu.active { right: 0; }
                    }
                "#}
            </style>
        </nav>
    }
}
