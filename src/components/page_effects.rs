//! Page-wide interaction wiring: scroll tracking, keyboard, pointer tilt, focus
//! outlines, reveal-on-scroll and smooth in-page links. Renders nothing.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::anchors::SectionAnchors;
use crate::config::{
    FOCUS_OUTLINE, FOCUS_OUTLINE_OFFSET, HERO_REVEAL_DELAY_MS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, SCROLL_DEBOUNCE_MS,
};
use crate::state::{CardRect, NavAction, NavState, Tilt, active_section};
use crate::util::{
    Debounced, Listener, Observer, add_class, for_each_match, scroll_to_anchor, scroll_y,
    set_timeout_once,
};

const TILT_SELECTOR: &str = ".project-card, .stats-card";
const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right";
const HERO_REVEAL_SELECTOR: &str = ".hero .fade-in, .hero .slide-in-left, .hero .slide-in-right";
const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Properties, PartialEq, Clone)]
pub struct PageEffectsProps {
    pub nav: UseReducerDispatcher<NavState>,
    pub anchors: SectionAnchors,
    /// True once portfolio content has been rendered.
    pub ready: bool,
}

pub fn is_focus_styled(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_lowercase().as_str(),
        "a" | "button" | "input" | "textarea" | "select"
    )
}

fn bind_scroll(nav: UseReducerDispatcher<NavState>, anchors: SectionAnchors) -> Option<Listener> {
    let window = web_sys::window()?;
    let track_section = {
        let nav = nav.clone();
        let window = window.clone();
        Debounced::new(window.clone(), SCROLL_DEBOUNCE_MS, move || {
            let spans = anchors.spans();
            if let Some(id) = active_section(scroll_y(&window), &spans) {
                nav.dispatch(NavAction::SectionInView(id.to_string()));
            }
        })
    };
    nav.dispatch(NavAction::Scrolled(scroll_y(&window)));
    let win = window.clone();
    Listener::new(&window, "scroll", move |_| {
        nav.dispatch(NavAction::Scrolled(scroll_y(&win)));
        track_section.call();
    })
}

fn bind_escape(nav: UseReducerDispatcher<NavState>) -> Option<Listener> {
    let window = web_sys::window()?;
    Listener::new(&window, "keydown", move |e: Event| {
        if let Ok(e) = e.dyn_into::<KeyboardEvent>() {
            if e.key() == "Escape" {
                nav.dispatch(NavAction::CloseMenu);
            }
        }
    })
}

fn bind_tilt() -> Option<Listener> {
    let document = web_sys::window()?.document()?;
    let doc = document.clone();
    Listener::new(&document, "mousemove", move |e: Event| {
        let Ok(e) = e.dyn_into::<MouseEvent>() else {
            return;
        };
        let (px, py) = (e.client_x() as f64, e.client_y() as f64);
        for_each_match(&doc, TILT_SELECTOR, |el| {
            let Ok(card) = el.dyn_into::<HtmlElement>() else {
                return;
            };
            let r = card.get_bounding_client_rect();
            let rect = CardRect { left: r.left(), top: r.top(), width: r.width(), height: r.height() };
            let _ = card.style().set_property("transform", &Tilt::at(px, py, rect).css());
        });
    })
}

fn bind_focus_outline() -> Vec<Listener> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    fn styled_target(e: &Event) -> Option<HtmlElement> {
        let el = e.target()?.dyn_into::<HtmlElement>().ok()?;
        is_focus_styled(&el.tag_name()).then_some(el)
    }
    let focus = Listener::new(&document, "focusin", |e: Event| {
        if let Some(el) = styled_target(&e) {
            let style = el.style();
            let _ = style.set_property("outline", FOCUS_OUTLINE);
            let _ = style.set_property("outline-offset", FOCUS_OUTLINE_OFFSET);
        }
    });
    let blur = Listener::new(&document, "focusout", |e: Event| {
        if let Some(el) = styled_target(&e) {
            let _ = el.style().set_property("outline", "none");
        }
    });
    focus.into_iter().chain(blur).collect()
}

fn bind_in_page_links() -> Option<Listener> {
    let document = web_sys::window()?.document()?;
    let doc = document.clone();
    Listener::new(&document, "click", move |e: Event| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest(IN_PAGE_LINK_SELECTOR) else {
            return;
        };
        e.prevent_default();
        if let Some(href) = link.get_attribute("href").filter(|h| h.len() > 1) {
            scroll_to_anchor(&doc, &href);
        }
    })
}

fn mark_loaded() {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        add_class(&body, "loaded");
    }
}

/// Observe reveal-animated elements; the hero is revealed after a short delay regardless.
fn start_reveal() -> Option<Observer> {
    let window = web_sys::window()?;
    let document = window.document()?;
    {
        let document = document.clone();
        set_timeout_once(&window, HERO_REVEAL_DELAY_MS, move || {
            for_each_match(&document, HERO_REVEAL_SELECTOR, |el| add_class(&el, "visible"));
        });
    }
    let observer = Observer::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |el, _| {
        add_class(el, "visible");
    })?;
    for_each_match(&document, REVEAL_SELECTOR, |el| observer.observe(&el));
    Some(observer)
}

#[function_component(PageEffects)]
pub fn page_effects(props: &PageEffectsProps) -> Html {
    // Window and document listeners live for the whole page.
    {
        let nav = props.nav.clone();
        let anchors = props.anchors.clone();
        use_effect_with((), move |_| {
            mark_loaded();
            let mut listeners: Vec<Listener> = Vec::new();
            listeners.extend(bind_scroll(nav.clone(), anchors));
            listeners.extend(bind_escape(nav));
            listeners.extend(bind_tilt());
            listeners.extend(bind_focus_outline());
            listeners.extend(bind_in_page_links());
            move || drop(listeners)
        });
    }
    // Reveal observer needs the rendered content, so it (re)binds once data is in.
    {
        use_effect_with(props.ready, move |ready| {
            let observer = if *ready { start_reveal() } else { None };
            move || drop(observer)
        });
    }
    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_outline_applies_to_interactive_tags() {
        for tag in ["A", "BUTTON", "INPUT", "TEXTAREA", "SELECT", "a"] {
            assert!(is_focus_styled(tag), "{tag}");
        }
        for tag in ["DIV", "SECTION", "SPAN", "P"] {
            assert!(!is_focus_styled(tag), "{tag}");
        }
    }
}
