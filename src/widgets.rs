use crate::{
    content::PROFILE_IMAGE,
    counter::{counter_label, CounterRun, COUNTER_DURATION_MS},
    hire_me::{
        celebrate, emoji_anchor, pick_emoji, ClickRect, ConfettiBurst, ConfettiSink, EmojiOverlay,
        EMOJI_LIFETIME_MS,
    },
    puzzle::{PuzzleEvent, PuzzleGate},
};
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect, JSON};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Element, HtmlAudioElement, MouseEvent};
use yew::prelude::*;

pub const HIRE_SOUND_ID: &str = "hire-sound";
const PUZZLE_REVEAL_DELAY_MS: u32 = 1_000;

fn log_debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

fn random_unit() -> f64 {
    js_sys::Math::random()
}

fn random_index(bound: usize) -> usize {
    ((random_unit() * bound as f64) as usize).min(bound.saturating_sub(1))
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// Forwards bursts to the `canvas-confetti` script loaded by the page.
struct WindowConfetti {
    confetti: Option<Function>,
}

impl WindowConfetti {
    fn locate() -> Self {
        let confetti = window()
            .and_then(|win| Reflect::get(&win, &JsValue::from_str("confetti")).ok())
            .and_then(|value| value.dyn_into::<Function>().ok());

        if confetti.is_none() {
            log_debug("confetti library not loaded; skipping particle burst");
        }

        Self { confetti }
    }
}

impl ConfettiSink for WindowConfetti {
    fn fire(&mut self, burst: &ConfettiBurst) {
        let Some(confetti) = self.confetti.as_ref() else {
            return;
        };
        let Ok(encoded) = serde_json::to_string(burst) else {
            return;
        };
        let Ok(options) = JSON::parse(&encoded) else {
            return;
        };

        let _ = confetti.call1(&JsValue::NULL, &options);
    }
}

fn play_hire_sound() {
    let Some(audio) = window()
        .and_then(|win| win.document())
        .and_then(|document| document.get_element_by_id(HIRE_SOUND_ID))
        .and_then(|element| element.dyn_into::<HtmlAudioElement>().ok())
    else {
        return;
    };

    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                log_debug("hire-me sound was blocked by the browser");
            }
        }),
        Err(_) => log_debug("hire-me sound could not start"),
    }
}

#[derive(Properties, PartialEq)]
pub struct HireMeButtonProps {
    /// Receives the click point so the page can float an emoji there.
    pub on_celebrate: Callback<(f64, f64)>,
}

#[function_component(HireMeButton)]
pub fn hire_me_button(props: &HireMeButtonProps) -> Html {
    let button_ref = use_node_ref();

    let onclick = {
        let button_ref = button_ref.clone();
        let on_celebrate = props.on_celebrate.clone();
        Callback::from(move |event: MouseEvent| {
            play_hire_sound();

            let button = button_ref.cast::<Element>().map(|button| {
                let rect = button.get_bounding_client_rect();
                ClickRect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                }
            });

            if let Some(rect) = button {
                let (viewport_width, viewport_height) = viewport_size();
                celebrate(
                    &mut WindowConfetti::locate(),
                    rect.origin_in(viewport_width, viewport_height),
                );
            }

            let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
            on_celebrate.emit(emoji_anchor(event.detail(), pointer, button));
        })
    };

    html! {
        <button ref={button_ref} class="hire-button" type="button" onclick={onclick}>
            {"HIRE ME"}
        </button>
    }
}

pub enum OverlayAction {
    Spawn { x: f64, y: f64 },
    Expire(u64),
}

impl Reducible for EmojiOverlay {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            OverlayAction::Spawn { x, y } => {
                next.spawn(pick_emoji(random_unit()), x, y);
            }
            OverlayAction::Expire(id) => {
                if !next.expire(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct FloatingEmojiProps {
    id: u64,
    glyph: AttrValue,
    x: f64,
    y: f64,
    on_expire: Callback<u64>,
}

/// One emoji; its removal timer lives and dies with the element.
#[function_component(FloatingEmojiView)]
fn floating_emoji(props: &FloatingEmojiProps) -> Html {
    {
        let id = props.id;
        let on_expire = props.on_expire.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(EMOJI_LIFETIME_MS, move || on_expire.emit(id));
            move || drop(timeout)
        });
    }

    let style = format!("left: {:.1}px; top: {:.1}px;", props.x, props.y);
    html! {
        <span class="floating-emoji" style={style} aria-hidden="true">{props.glyph.clone()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmojiLayerProps {
    pub overlay: EmojiOverlay,
    pub on_expire: Callback<u64>,
}

#[function_component(EmojiLayer)]
pub fn emoji_layer(props: &EmojiLayerProps) -> Html {
    html! {
        <div class="emoji-layer">
            { for props.overlay.items().iter().map(|item| html! {
                <FloatingEmojiView
                    key={item.id}
                    id={item.id}
                    glyph={item.glyph}
                    x={item.x}
                    y={item.y}
                    on_expire={props.on_expire.clone()}
                />
            }) }
        </div>
    }
}

impl Reducible for PuzzleGate {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.select(index) {
            PuzzleEvent::Ignored => self,
            _ => Rc::new(next),
        }
    }
}

#[function_component(PuzzleGateView)]
pub fn puzzle_gate() -> Html {
    let gate = use_reducer(|| PuzzleGate::shuffled(random_index));
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(gate.is_solved(), move |solved| {
            let reveal = solved
                .then(|| Timeout::new(PUZZLE_REVEAL_DELAY_MS, move || revealed.set(true)));
            move || drop(reveal)
        });
    }

    if *revealed {
        return html! {
            <img class="profile-photo" src={PROFILE_IMAGE} alt="Profile picture" />
        };
    }

    let status = if gate.is_solved() {
        "Unlocked!"
    } else if gate.selected().is_some() {
        "Now pick a tile to swap with."
    } else {
        "Swap the tiles to spell the word and unlock my photo."
    };

    html! {
        <div class={classes!("puzzle", gate.is_solved().then_some("is-solved"))}>
            <div class="puzzle-tiles" role="group" aria-label="Letter puzzle">
                { for gate.tiles().iter().enumerate().map(|(index, tile)| {
                    let onclick = {
                        let gate = gate.clone();
                        Callback::from(move |_: MouseEvent| gate.dispatch(index))
                    };
                    let selected = gate.selected() == Some(index);
                    html! {
                        <button
                            key={tile.id}
                            type="button"
                            class={classes!(
                                "puzzle-tile",
                                selected.then_some("is-selected"),
                                tile.correct.then_some("is-correct"),
                            )}
                            aria-pressed={selected.to_string()}
                            disabled={gate.is_solved()}
                            onclick={onclick}
                        >
                            {tile.letter.to_string()}
                        </button>
                    }
                }) }
            </div>
            <p class="puzzle-status">{status}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    #[prop_or_default]
    pub from: u32,
    pub to: u32,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: f64,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let win = window()?;
    let borrowed = callback.borrow();
    let closure = borrowed.as_ref()?;
    win.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

/// Counts from `from` to `to` once per animation frame, then holds.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let value = use_state_eq(|| props.from);

    {
        let value = value.clone();
        let duration = props.duration_ms;
        use_effect_with((props.from, props.to), move |&(from, to)| {
            let run = Rc::new(RefCell::new(CounterRun::new(from, to, duration)));
            let callback: FrameCallback = Rc::new(RefCell::new(None));

            {
                let run = run.clone();
                let next_frame = callback.clone();
                *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                    let (shown, more) = run.borrow_mut().advance(timestamp);
                    value.set(shown);
                    if more {
                        let id = request_frame(&next_frame);
                        run.borrow_mut().frame_requested(id);
                    }
                }));
            }
            let first = request_frame(&callback);
            run.borrow_mut().frame_requested(first);

            move || {
                if let (Some(id), Some(win)) = (run.borrow_mut().cancel(), window()) {
                    let _ = win.cancel_animation_frame(id);
                }
                callback.borrow_mut().take();
            }
        });
    }

    html! { <span class="counter-value">{counter_label(*value)}</span> }
}
