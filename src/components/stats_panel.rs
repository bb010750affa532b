use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTER_FRAME_MS, STAT_VISIBLE_THRESHOLD};
use crate::model::Stat;
use crate::state::CounterAnimation;
use crate::util::{Interval, Observer};

#[derive(Properties, PartialEq, Clone)]
pub struct StatCounterProps {
    pub stat: Stat,
}

/// Shows 0 until first scrolled into view, then counts up to the stat's target once.
#[function_component]
pub fn StatCounter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| 0u32);
    {
        let node = node.clone();
        let shown = shown.clone();
        use_effect_with(props.stat.number.clone(), move |_| {
            let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let observer = match (web_sys::window(), node.cast::<Element>()) {
                (Some(window), Some(el)) => {
                    let ticker = ticker.clone();
                    let observer = Observer::new(STAT_VISIBLE_THRESHOLD, None, move |el, obs| {
                        obs.unobserve(el);
                        let target = el
                            .get_attribute("data-target")
                            .map(|raw| crate::model::parse_leading_int(&raw))
                            .unwrap_or(0);
                        let mut anim = CounterAnimation::new(target);
                        let shown = shown.clone();
                        let stop = ticker.clone();
                        let interval = Interval::start(&window, COUNTER_FRAME_MS, move || {
                            shown.set(anim.tick());
                            if anim.is_finished() {
                                if let Some(t) = stop.borrow_mut().as_mut() {
                                    t.stop();
                                }
                            }
                        });
                        *ticker.borrow_mut() = Some(interval);
                    });
                    if let Some(o) = &observer {
                        o.observe(&el);
                    }
                    observer
                }
                _ => None,
            };
            move || {
                drop(observer);
                ticker.borrow_mut().take();
            }
        });
    }
    html! {
        <div class="stat">
            <div class="stat-number" data-target={props.stat.number.clone()} ref={node}>{ *shown }</div>
            <div class="stat-label">{ props.stat.label.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub stats: Vec<Stat>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    if props.stats.is_empty() {
        return html! {};
    }
    html! {
        <div id="stats-container" class="stats-card">
            { for props.stats.iter().map(|stat| html! { <StatCounter stat={stat.clone()} /> }) }
        </div>
    }
}
