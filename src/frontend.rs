use crate::{
    content::{OWNER_FIRST_NAME, OWNER_LAST_NAME},
    hire_me::{EmojiOverlay, HIRE_SOUND_URL},
    sections::{scroll_progress, spy, ScrollMetrics, Section, SectionBounds},
    theme::Theme,
    views::{About, Certifications, Contact, Hero, Journey, Projects, SiteFooter, Skills},
    widgets::{EmojiLayer, OverlayAction, HIRE_SOUND_ID},
};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, HtmlElement, MouseEvent};
use yew::prelude::*;

/// Scroll-derived page state: how far down the reader is and which section
/// the navigation highlights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScrollState {
    progress: f64,
    active: Section,
}

struct Scrolled {
    metrics: ScrollMetrics,
    bounds: Vec<(Section, SectionBounds)>,
}

impl Reducible for ScrollState {
    type Action = Scrolled;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = ScrollState {
            progress: scroll_progress(&action.metrics),
            active: spy(&action.bounds, &action.metrics, self.active),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Puts the palette on `<html>` so the page, `body` and the overscroll area
/// all resolve the same variables.
fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
        let _ = root.set_attribute("style", &theme.root_style());
    }
}

fn scroll_metrics(document: &Document) -> Option<ScrollMetrics> {
    let root = document.document_element()?;
    let scroll_top = window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_else(|| f64::from(root.scroll_top()));

    Some(ScrollMetrics {
        scroll_top,
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

fn section_bounds(document: &Document) -> Vec<(Section, SectionBounds)> {
    Section::ALL
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some((
                *section,
                SectionBounds::new(
                    f64::from(element.offset_top()),
                    f64::from(element.offset_height()),
                ),
            ))
        })
        .collect()
}

fn observe_scroll() -> Option<Scrolled> {
    let document = window()?.document()?;
    Some(Scrolled {
        metrics: scroll_metrics(&document)?,
        bounds: section_bounds(&document),
    })
}

#[derive(Properties, PartialEq)]
struct ProgressBarProps {
    progress: f64,
}

#[function_component(ProgressBar)]
fn progress_bar(props: &ProgressBarProps) -> Html {
    let style = format!("width: {:.2}%;", props.progress);

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <div class="scroll-progress-fill" style={style}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    theme: Theme,
    active: Section,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let theme = props.theme;

    html! {
        <nav class="site-nav">
            <a class="brand" href={Section::Home.href()}>
                <span class="brand-first">{OWNER_FIRST_NAME}</span>
                {" "}
                <span class="brand-last">{OWNER_LAST_NAME}</span>
            </a>
            <ul class="nav-links">
                { for Section::ALL.iter().map(|section| {
                    let active = *section == props.active;
                    html! {
                        <li key={section.id()}>
                            <a
                                href={section.href()}
                                class={classes!(
                                    "nav-link",
                                    (*section == Section::Contact).then_some("nav-cta"),
                                    active.then_some("is-active"),
                                )}
                                aria-current={active.then_some("true")}
                            >
                                {section.label()}
                            </a>
                        </li>
                    }
                }) }
            </ul>
            <button
                class="theme-toggle"
                type="button"
                aria-label={theme.toggle_label()}
                aria-pressed={theme.is_dark().to_string()}
                onclick={props.on_toggle.clone()}
            >
                <span aria-hidden="true">{theme.icon()}</span>
            </button>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state_eq(Theme::default);
    let scroll = use_reducer_eq(ScrollState::default);
    let overlay = use_reducer(EmojiOverlay::default);

    use_effect_with(*theme, move |theme| {
        apply_theme(*theme);
        || ()
    });

    {
        let dispatcher = scroll.dispatcher();
        use_effect_with((), move |_| {
            if let Some(observed) = observe_scroll() {
                dispatcher.dispatch(observed);
            }

            let handler = Closure::<dyn FnMut()>::new(move || {
                if let Some(observed) = observe_scroll() {
                    dispatcher.dispatch(observed);
                }
            });

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        handler.as_ref().unchecked_ref(),
                    );
                }
                drop(handler);
            }
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set((*theme).toggled()))
    };

    let on_celebrate = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |(x, y): (f64, f64)| dispatcher.dispatch(OverlayAction::Spawn { x, y }))
    };

    let on_emoji_expire = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(OverlayAction::Expire(id)))
    };

    let current = *theme;

    html! {
        <div class="page">
            <audio id={HIRE_SOUND_ID} src={HIRE_SOUND_URL} preload="auto" hidden={true}></audio>
            <ProgressBar progress={scroll.progress} />
            <NavBar theme={current} active={scroll.active} on_toggle={on_toggle} />
            <main class="page-main">
                <Hero theme={current} on_celebrate={on_celebrate} />
                <About />
                <Journey />
                <Projects />
                <Skills theme={current} />
                <Certifications />
                <Contact />
            </main>
            <SiteFooter />
            <EmojiLayer overlay={(*overlay).clone()} on_expire={on_emoji_expire} />
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
