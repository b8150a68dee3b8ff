use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::cipher::gate::{MediaGate, VideoGate};

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub video_url: String,
    pub gate: VideoGate,
}

/// Keys that dismiss the overlay.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Full-screen video overlay. Escape and the close button both dismiss it.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    {
        let gate = props.gate.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = match (*open, web_sys::window().and_then(|w| w.document())) {
                    (true, Some(document)) => {
                        set_body_overflow("hidden");
                        let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if is_dismiss_key(&e.key()) {
                                debug!("Escape pressed on video overlay");
                                gate.close();
                            }
                        });
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            );
                            set_body_overflow("");
                        })
                    }
                    _ => Box::new(|| ()),
                };
                destructor
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let gate = props.gate.clone();
        Callback::from(move |_: MouseEvent| gate.close())
    };

    html! {
        <div class="video-overlay">
            <button class="video-close" onclick={close}>{"CLOSE [ESC]"}</button>
            <div class="video-frame">
                <iframe
                    src={props.video_url.clone()}
                    title="YouTube video player"
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                ></iframe>
            </div>
            <style>
                {r#"
                .video-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(24px);
                }
                .video-close {
                    position: absolute;
                    top: 24px;
                    right: 24px;
                    padding: 8px 16px;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.5);
                    font-family: monospace;
                    cursor: pointer;
                }
                .video-close:hover {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                }
                .video-frame {
                    width: 100%;
                    max-width: 72rem;
                    aspect-ratio: 16 / 9;
                    background: #000;
                    border-radius: 8px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 0 50px rgba(37, 99, 235, 0.2);
                }
                .video-frame iframe {
                    width: 100%;
                    height: 100%;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses_overlay() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("e"));
    }

    #[test]
    fn props_compare_by_open_flag() {
        let gate = VideoGate::new(Callback::noop());
        let closed = VideoModalProps {
            open: false,
            video_url: "https://example.com/embed".to_string(),
            gate: gate.clone(),
        };
        let open = VideoModalProps {
            open: true,
            video_url: "https://example.com/embed".to_string(),
            gate,
        };
        assert!(closed != open);
    }
}
