use std::rc::Rc;
use yew::Reducible;

use crate::config::{BACK_TO_TOP_THRESHOLD, NAVBAR_SCROLLED_THRESHOLD, SECTION_LOOKAHEAD};

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section whose span (shifted up by the lookahead margin) contains `scroll_y`.
/// When spans overlap the later section wins.
pub fn active_section(scroll_y: f64, spans: &[SectionSpan]) -> Option<&str> {
    spans
        .iter()
        .filter(|s| {
            let top = s.top - SECTION_LOOKAHEAD;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    /// Section id of the highlighted nav link.
    pub active_link: Option<String>,
    pub scrolled: bool,
    pub show_back_to_top: bool,
}

#[derive(Clone, Debug)]
pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    LinkClicked(String),
    SectionInView(String),
    Scrolled(f64),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavAction::CloseMenu => next.menu_open = false,
            NavAction::LinkClicked(id) => {
                next.menu_open = false;
                next.active_link = Some(id);
            }
            NavAction::SectionInView(id) => next.active_link = Some(id),
            NavAction::Scrolled(y) => {
                next.scrolled = y > NAVBAR_SCROLLED_THRESHOLD;
                next.show_back_to_top = y > BACK_TO_TOP_THRESHOLD;
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}
