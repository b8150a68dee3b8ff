use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub duration_ms: u32,
}

/// Splash screen shown on first paint.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let visible = use_state(|| true);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |duration_ms| {
                let timeout = Timeout::new(*duration_ms, move || setter.set(false));
                move || drop(timeout)
            },
            props.duration_ms,
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="site-loader">
            <div class="loader-inner">
                <img src="/images/logo.png" alt="Masson logo" class="loader-logo" />
                <div class="loader-text">{"M A S S O N"}</div>
            </div>
            <style>
                {r#"
                .site-loader {
                    position: fixed;
                    inset: 0;
                    z-index: 120;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #020617;
                }
                .loader-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .loader-logo {
                    width: 80px;
                    height: 80px;
                    border-radius: 50%;
                    object-fit: cover;
                    animation: logoPop 0.9s ease-out;
                }
                .loader-text {
                    color: #93c5fd;
                    letter-spacing: 0.3em;
                    font-size: 0.875rem;
                }
                @keyframes logoPop {
                    from { transform: scale(0.6); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
