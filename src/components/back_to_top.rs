use yew::prelude::*;

use crate::util::scroll_to_top;

#[derive(Properties, PartialEq, Clone)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component]
pub fn BackToTop(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_| {
        if let Some(win) = web_sys::window() {
            scroll_to_top(&win);
        }
    });
    html! {
        <button id="back-to-top" class={classes!("back-to-top", props.visible.then_some("visible"))} aria-label="Back to top" {onclick}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
