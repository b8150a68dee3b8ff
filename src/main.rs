use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod cipher {
    pub mod controller;
    pub mod gate;
    pub mod state;
}
mod components {
    pub mod carousel;
    pub mod cipher_board;
    pub mod loader;
    pub mod video_modal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#game-section", "Cipher"),
    ("#about", "About"),
    ("#highlights", "Highlights"),
    ("#final-cta", "Watch"),
];

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
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home} classes="not-found-link">
                        {"Back to Masson House"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new({
                let window = window.clone();
                move || {
                    if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > 40.0);
                    }
                }
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS.iter().map(|(href, label)| html! {
            <a key={*href} href={*href} class={class} onclick={close_menu.clone()}>{*label}</a>
        }).collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src="/images/logo.png" alt="Masson House" />
                    <span>{"Masson House"}</span>
                </a>
                <div class="nav-links">{links("nav-link")}</div>
                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! { <div class="mobile-menu">{links("mobile-link")}</div> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 1rem;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 0 1rem;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 9999px;
                    background: linear-gradient(90deg, rgba(3, 7, 18, 0.6), rgba(2, 6, 23, 0.4));
                    backdrop-filter: blur(6px);
                    transition: background 0.3s;
                }
                .top-nav.scrolled .nav-content {
                    background: rgba(2, 6, 23, 0.9);
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 700;
                }
                .nav-logo img {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .nav-link, .mobile-link {
                    color: rgba(219, 234, 254, 0.7);
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover, .mobile-link:hover {
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4px;
                    width: 24px;
                    height: 20px;
                    background: none;
                    border: none;
                    color: rgba(191, 219, 254, 0.9);
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    height: 2px;
                    width: 100%;
                    background: currentColor;
                    transition: transform 0.2s, opacity 0.2s;
                }
                .burger-menu.open span:nth-child(1) { transform: rotate(45deg) translateY(6px); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: rotate(-45deg) translateY(-6px); }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 0.5rem;
                    padding: 1rem;
                    border-radius: 0 0 16px 16px;
                    background: rgba(17, 24, 39, 0.95);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #020617;
                    color: #fff;
                }
                .not-found-link {
                    color: #60a5fa;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                    .nav-content { border-radius: 16px; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Masson House");
    yew::Renderer::<App>::new().render();
}
