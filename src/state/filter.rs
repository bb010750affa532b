use std::rc::Rc;
use yew::Reducible;

use super::transition::{Phase, Transition};
use crate::config::{CARD_HIDE_DELAY_MS, CARD_SHOW_DELAY_MS};
use crate::model::Project;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    /// Fixed at render time.
    pub category: String,
    pub transition: Transition,
}

/// Category filter over the rendered project cards (card identity is its index).
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectFilter {
    active: String,
    cards: Vec<CardState>,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

pub fn category_matches(filter: &str, category: &str) -> bool {
    filter == ALL_CATEGORIES || filter == category
}

/// Filter keys offered to the visitor: "all", then each category in first-seen order.
pub fn filter_keys(projects: &[Project]) -> Vec<String> {
    let mut keys = vec![ALL_CATEGORIES.to_string()];
    for p in projects {
        if !keys.iter().any(|k| *k == p.category) {
            keys.push(p.category.clone());
        }
    }
    keys
}

impl ProjectFilter {
    /// Every card starts fading in under the "all" filter.
    pub fn new(categories: Vec<String>) -> Self {
        let cards = categories
            .into_iter()
            .map(|category| CardState {
                category,
                transition: Transition::new(Phase::Appearing, CARD_SHOW_DELAY_MS, CARD_HIDE_DELAY_MS),
            })
            .collect();
        Self { active: ALL_CATEGORIES.to_string(), cards }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn select(&mut self, category: &str) {
        self.active = category.to_string();
        for card in &mut self.cards {
            if category_matches(category, &card.category) {
                card.transition.show();
            } else {
                card.transition.hide();
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(|c| c.transition.is_settling())
    }

    pub fn advance(&mut self, dt_ms: u32) -> bool {
        let mut changed = false;
        for card in &mut self.cards {
            changed |= card.transition.advance(dt_ms);
        }
        changed
    }

    /// Indices of cards that occupy layout.
    #[cfg(test)]
    pub fn in_layout(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.transition.in_layout())
            .map(|(i, _)| i)
            .collect()
    }
}

#[derive(Clone, Debug)]
pub enum FilterAction {
    Reset(Vec<String>),
    Select(String),
    Advance { dt_ms: u32 },
}

impl Reducible for ProjectFilter {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FilterAction::Reset(categories) => {
                if self.cards.iter().map(|c| &c.category).eq(categories.iter()) {
                    return self;
                }
                Rc::new(ProjectFilter::new(categories))
            }
            FilterAction::Select(category) => {
                let mut next = (*self).clone();
                next.select(&category);
                Rc::new(next)
            }
            FilterAction::Advance { dt_ms } => {
                if !self.is_animating() {
                    return self;
                }
                let mut next = (*self).clone();
                next.advance(dt_ms);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(cats: &[&str]) -> ProjectFilter {
        let mut f = ProjectFilter::new(cats.iter().map(|c| c.to_string()).collect());
        f.advance(CARD_SHOW_DELAY_MS);
        f
    }

    fn settle(f: &mut ProjectFilter) {
        f.advance(CARD_HIDE_DELAY_MS.max(CARD_SHOW_DELAY_MS));
    }

    #[test]
    fn starts_with_all_cards_shown() {
        let f = filter(&["web", "cli", "web"]);
        assert_eq!(f.active(), ALL_CATEGORIES);
        assert_eq!(f.in_layout(), vec![0, 1, 2]);
        assert!(f.cards().iter().all(|c| c.transition.phase() == Phase::Visible));
    }

    #[test]
    fn category_shows_exactly_matching_cards() {
        let mut f = filter(&["web", "cli", "web", "game"]);
        for (cat, expected) in [("web", vec![0, 2]), ("cli", vec![1]), ("game", vec![3])] {
            f.select(cat);
            settle(&mut f);
            assert_eq!(f.in_layout(), expected, "filter {cat}");
        }
        f.select(ALL_CATEGORIES);
        settle(&mut f);
        assert_eq!(f.in_layout(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn hidden_cards_fade_before_leaving_layout() {
        let mut f = filter(&["web", "cli"]);
        f.select("web");
        assert_eq!(f.cards()[1].transition.phase(), Phase::Disappearing);
        assert_eq!(f.in_layout(), vec![0, 1]);
        f.advance(CARD_HIDE_DELAY_MS - 1);
        assert_eq!(f.in_layout(), vec![0, 1]);
        f.advance(1);
        assert_eq!(f.in_layout(), vec![0]);
    }

    #[test]
    fn shown_cards_enter_layout_immediately() {
        let mut f = filter(&["web", "cli"]);
        f.select("web");
        settle(&mut f);
        f.select("cli");
        assert_eq!(f.cards()[1].transition.phase(), Phase::Appearing);
        assert!(f.in_layout().contains(&1));
        f.advance(CARD_SHOW_DELAY_MS);
        assert_eq!(f.cards()[1].transition.phase(), Phase::Visible);
    }

    #[test]
    fn rapid_reselection_keeps_last_choice() {
        let mut f = filter(&["web", "cli"]);
        f.select("cli");
        f.advance(50);
        f.select("web");
        settle(&mut f);
        assert_eq!(f.in_layout(), vec![0]);
    }

    #[test]
    fn unknown_category_hides_everything() {
        let mut f = filter(&["web", "cli"]);
        f.select("hardware");
        settle(&mut f);
        assert!(f.in_layout().is_empty());
    }

    #[test]
    fn filter_keys_follow_first_appearance() {
        let projects: Vec<Project> = ["web", "cli", "web", "game"]
            .iter()
            .map(|c| Project { category: c.to_string(), ..Default::default() })
            .collect();
        assert_eq!(filter_keys(&projects), ["all", "web", "cli", "game"]);
        assert_eq!(filter_keys(&[]), ["all"]);
    }

    #[test]
    fn reset_with_same_cards_keeps_selection() {
        let mut f = filter(&["web", "cli"]);
        f.select("cli");
        let f = Rc::new(f);
        let next = f.clone().reduce(FilterAction::Reset(vec!["web".into(), "cli".into()]));
        assert!(Rc::ptr_eq(&f, &next));
        let next = f.reduce(FilterAction::Reset(vec!["game".into()]));
        assert_eq!(next.active(), ALL_CATEGORIES);
        assert_eq!(next.in_layout(), vec![0]);
    }

    #[test]
    fn idle_advance_keeps_same_state() {
        let f = Rc::new(filter(&["web"]));
        let next = f.clone().reduce(FilterAction::Advance { dt_ms: 16 });
        assert!(Rc::ptr_eq(&f, &next));
    }

    #[test]
    fn animating_only_while_cards_transition() {
        let mut f = ProjectFilter::new(vec!["web".into(), "cli".into()]);
        assert!(f.is_animating());
        f.advance(CARD_SHOW_DELAY_MS);
        assert!(!f.is_animating());
        f.select("web");
        assert!(f.is_animating());
        f.advance(CARD_HIDE_DELAY_MS);
        assert!(!f.is_animating());
        f.select("web");
        assert!(!f.is_animating());
    }
}
