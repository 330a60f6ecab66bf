use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::BACK_TO_TOP_THRESHOLD;
use crate::dom;
use crate::hooks::use_scroll_past;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_scroll_past(BACK_TO_TOP_THRESHOLD);

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = dom::scroll_to_top() {
            warn!("{}", e);
        }
    });

    html! {
        <a href="#" class={classes!("back-to-top", visible.then(|| "active"))} aria-label="Back to top" {onclick}>
            {"↑"}
        </a>
    }
}
