use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::interaction::scroll;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that smooth-scrolls to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            // Links to other pages keep their normal navigation
            if scroll::is_in_page(&href) {
                e.prevent_default();
            }
            if let Some(extra) = &extra {
                extra.emit(e);
            }
            let Some(selector) = scroll::anchor_selector(&href) else {
                return;
            };
            debug!("Scrolling to {}", selector);
            if let Err(e) = dom::scroll_to_anchor(selector) {
                warn!("{}", e);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
