use std::cell::Cell;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, ScrollListener};
use crate::interaction::scroll;

/// Whether the window has scrolled past `threshold`. State is only written
/// when the answer flips.
#[hook]
pub fn use_scroll_past(threshold: f64) -> bool {
    let past = use_state(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let last = Cell::new(None);
                let listener = ScrollListener::attach(move || match dom::scroll_y() {
                    Ok(y) => {
                        let now = scroll::past_threshold(y, threshold);
                        if last.get() != Some(now) {
                            last.set(Some(now));
                            past.set(now);
                        }
                    }
                    Err(e) => warn!("scroll position unavailable: {}", e),
                });
                if let Err(e) = &listener {
                    warn!("could not watch scrolling: {}", e);
                }
                move || drop(listener)
            },
            threshold,
        );
    }

    *past
}

/// Latches to `true` the first time the referenced element's top rises
/// above `innerHeight / ratio`, then stops checking.
#[hook]
pub fn use_in_view(node: NodeRef, ratio: f64) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |(node, ratio)| {
                let node = node.clone();
                let ratio = *ratio;
                let latched = Cell::new(false);
                let listener = ScrollListener::attach(move || {
                    if latched.get() {
                        return;
                    }
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    match dom::viewport_height() {
                        Ok(height) => {
                            let top = element.get_bounding_client_rect().top();
                            if scroll::in_view(top, height, ratio) {
                                latched.set(true);
                                seen.set(true);
                            }
                        }
                        Err(e) => warn!("viewport height unavailable: {}", e),
                    }
                });
                if let Err(e) = &listener {
                    warn!("could not watch scrolling: {}", e);
                }
                move || drop(listener)
            },
            (node, ratio),
        );
    }

    *seen
}
