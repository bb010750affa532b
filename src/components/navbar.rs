use yew::prelude::*;

use super::anchors::NAV_SECTIONS;
use crate::state::{NavAction, NavState};

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub nav: UseReducerHandle<NavState>,
    pub brand: Option<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let nav = &props.nav;
    let toggle = {
        let nav = nav.clone();
        Callback::from(move |_| nav.dispatch(NavAction::ToggleMenu))
    };
    // Translucent bar; gains a shadow once the page scrolls.
    let style = if nav.scrolled {
        "background:rgba(255, 255, 255, 0.98); box-shadow:0 2px 20px rgba(0, 0, 0, 0.1);"
    } else {
        "background:rgba(255, 255, 255, 0.95); box-shadow:none;"
    };
    let open = nav.menu_open.then_some("active");

    html! {
        <nav id="navbar" class="navbar" {style}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{ props.brand.clone().unwrap_or_else(|| "Portfolio".into()) }</a>
                <ul id="nav-menu" class={classes!("nav-menu", open)}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| {
                        let onclick = {
                            let nav = nav.clone();
                            let id = id.to_string();
                            Callback::from(move |_| nav.dispatch(NavAction::LinkClicked(id.clone())))
                        };
                        let active = (nav.active_link.as_deref() == Some(*id)).then_some("active");
                        html! {
                            <li class="nav-item">
                                <a href={format!("#{id}")} class={classes!("nav-link", active)} {onclick}>{ *label }</a>
                            </li>
                        }
                    }) }
                </ul>
                <button id="nav-toggle" class={classes!("nav-toggle", open)} aria-label="Toggle navigation" onclick={toggle}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
