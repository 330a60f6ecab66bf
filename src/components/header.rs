use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config::{HEADER_ID, HEADER_SCROLL_THRESHOLD};
use crate::hooks::use_scroll_past;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#process", "Process"),
    ("#portfolio", "Work"),
    ("#testimonials", "Clients"),
    ("#contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_past(HEADER_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header id={HEADER_ID} class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <AnchorLink href="#home" class="logo">
                    {"Brightline"}
                </AnchorLink>

                <button class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("main-nav", (*menu_open).then(|| "active"))}>
                    <ul class="nav-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <AnchorLink href={*href} onclick={close_menu.clone()}>
                                    {*label}
                                </AnchorLink>
                            </li>
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
