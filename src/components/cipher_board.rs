use gloo_timers::callback::Timeout;
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::cipher::controller::{BrowserTimer, CipherController};
use crate::cipher::gate::VideoGate;
use crate::cipher::state::{PuzzleState, TapOutcome};

const PRESS_MS: u32 = 120;
const SHAKE_MS: u32 = 320;

/// Typed letters followed by one `_` per letter still missing.
pub fn typed_prefix(attempt: &str, total: usize) -> String {
    let typed = attempt.chars().count();
    let mut readout = attempt.to_string();
    readout.extend(std::iter::repeat('_').take(total.saturating_sub(typed)));
    readout
}

#[derive(Properties, PartialEq)]
pub struct CipherBoardProps {
    pub target_word: String,
    pub tiles: String,
    pub unlock_delay_ms: u32,
    pub gate: VideoGate,
    /// `true` on unlock, `false` on reset.
    #[prop_or_default]
    pub on_lock_change: Callback<bool>,
}

pub enum CipherBoardMsg {
    Tap(char, usize),
    Reset,
    ReleaseTile,
    StopShake,
}

pub struct CipherBoard {
    controller: CipherController<VideoGate, BrowserTimer, StdRng>,
    pressed: Option<usize>,
    shaking: bool,
    press_timeout: Option<Timeout>,
    shake_timeout: Option<Timeout>,
}

impl Component for CipherBoard {
    type Message = CipherBoardMsg;
    type Properties = CipherBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let state = PuzzleState::new(&props.target_word, &props.tiles).unwrap_or_else(|e| {
            error!("Cipher '{}' is not solvable: {}", props.target_word, e);
            PuzzleState::default()
        });

        Self {
            controller: CipherController::new(
                state,
                props.gate.clone(),
                BrowserTimer,
                StdRng::from_entropy(),
                props.unlock_delay_ms,
            ),
            pressed: None,
            shaking: false,
            press_timeout: None,
            shake_timeout: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.controller.set_gate(ctx.props().gate.clone());
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CipherBoardMsg::Tap(ch, position) => {
                let outcome = self.controller.tap(ch, position);
                if outcome == TapOutcome::Ignored {
                    return false;
                }

                self.pressed = Some(position);
                let link = ctx.link().clone();
                self.press_timeout = Some(Timeout::new(PRESS_MS, move || {
                    link.send_message(CipherBoardMsg::ReleaseTile)
                }));

                match outcome {
                    TapOutcome::Rejected => {
                        self.shaking = true;
                        let link = ctx.link().clone();
                        self.shake_timeout = Some(Timeout::new(SHAKE_MS, move || {
                            link.send_message(CipherBoardMsg::StopShake)
                        }));
                    }
                    TapOutcome::Unlocked => ctx.props().on_lock_change.emit(true),
                    _ => {}
                }
                true
            }
            CipherBoardMsg::Reset => {
                let was_unlocked = self.controller.state().is_unlocked();
                self.controller.reset();
                self.pressed = None;
                self.shaking = false;
                self.press_timeout = None;
                self.shake_timeout = None;
                if was_unlocked {
                    ctx.props().on_lock_change.emit(false);
                }
                true
            }
            CipherBoardMsg::ReleaseTile => {
                self.pressed = None;
                true
            }
            CipherBoardMsg::StopShake => {
                self.shaking = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let (matched, total) = state.progress();

        html! {
            <div class="cipher-card">
                <div class="cipher-header">
                    <h3>{"SECURITY_LAYER_01"}</h3>
                    <button class="cipher-reset" onclick={ctx.link().callback(|_| CipherBoardMsg::Reset)}>
                        {"RESET CIPHER"}
                    </button>
                </div>

                <div class={classes!("cipher-grid", self.shaking.then(|| "shake"))}>
                    {
                        state.tiles().iter().enumerate().map(|(i, &ch)| {
                            html! {
                                <button
                                    key={i}
                                    class={classes!("tile", (self.pressed == Some(i)).then(|| "pressed"))}
                                    onclick={ctx.link().callback(move |_| CipherBoardMsg::Tap(ch, i))}
                                >
                                    {ch.to_string()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                    <div class="cipher-typed">{typed_prefix(&state.attempt(), total)}</div>
                    <div class="cipher-progress">
                        {
                            (0..total).map(|i| html! {
                                <span class={classes!("progress-dot", (i < matched).then(|| "filled"))}></span>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="cipher-hint">
                        {format!("Tap letters in order to spell {} — complete to unlock the video", state.target())}
                    </div>

                    <div class={classes!("win-message", state.is_unlocked().then(|| "visible"))}>
                        <div class="win-title">{"UNLOCKED"}</div>
                        <p>{"LOADING VIDEO DATA..."}</p>
                    </div>
                </div>

                <style>
                    {r#"
                    .cipher-card {
                        position: relative;
                        background: rgba(17, 24, 39, 0.8);
                        backdrop-filter: blur(24px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .cipher-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .cipher-header h3 {
                        font-family: monospace;
                        font-size: 0.875rem;
                        color: #93c5fd;
                        margin: 0;
                    }
                    .cipher-reset {
                        background: none;
                        border: none;
                        font-size: 0.75rem;
                        color: #9ca3af;
                        text-decoration: underline;
                        text-decoration-color: #3b82f6;
                        text-decoration-thickness: 2px;
                        text-underline-offset: 4px;
                        cursor: pointer;
                    }
                    .cipher-reset:hover {
                        color: #fff;
                    }
                    .cipher-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2px;
                        width: 100%;
                        max-width: 400px;
                        margin: 0 auto;
                        padding: 8px;
                        background: rgba(37, 99, 235, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                    }
                    .cipher-grid.shake {
                        animation: shake 0.08s ease-in-out 4 alternate;
                    }
                    @keyframes shake {
                        from { transform: translateX(0); }
                        to { transform: translateX(-8px); }
                    }
                    .tile {
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        user-select: none;
                        background-color: rgba(30, 58, 138, 0.5);
                        border: none;
                        border-radius: 4px;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .tile:hover {
                        z-index: 10;
                        transform: scale(1.02);
                        box-shadow: 0 0 15px rgba(37, 99, 235, 0.4);
                    }
                    .tile.pressed {
                        transform: scale(0.95);
                        opacity: 0.7;
                    }
                    .cipher-progress {
                        grid-column: span 3;
                        display: flex;
                        justify-content: center;
                        gap: 6px;
                        margin-top: 12px;
                    }
                    .cipher-typed {
                        grid-column: span 3;
                        margin-top: 12px;
                        text-align: center;
                        font-family: monospace;
                        font-size: 1.125rem;
                        letter-spacing: 0.4em;
                        color: #bfdbfe;
                    }
                    .progress-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: 1px solid rgba(96, 165, 250, 0.6);
                    }
                    .progress-dot.filled {
                        background: #3b82f6;
                    }
                    .cipher-hint {
                        grid-column: span 3;
                        margin-top: 12px;
                        text-align: center;
                        font-family: monospace;
                        font-size: 0.75rem;
                        color: #9ca3af;
                    }
                    .win-message {
                        position: absolute;
                        inset: 0;
                        z-index: 20;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                        border-radius: 12px;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out, visibility 0.8s;
                    }
                    .win-message.visible {
                        opacity: 1;
                        visibility: visible;
                        transform: scale(1.02);
                    }
                    .win-title {
                        color: #3b82f6;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .win-message p {
                        color: rgba(255, 255, 255, 0.6);
                        font-family: monospace;
                        font-size: 0.75rem;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
