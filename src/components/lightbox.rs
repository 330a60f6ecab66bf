use log::{debug, warn};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::video_embed_url;
use crate::dom;
use crate::interaction::lightbox::{ClickOrigin, Lightbox};

#[derive(Properties, PartialEq)]
pub struct VideoLightboxProps {
    pub video_id: AttrValue,
    pub thumbnail: AttrValue,
}

#[function_component(VideoLightbox)]
pub fn video_lightbox(props: &VideoLightboxProps) -> Html {
    let lightbox = use_state(Lightbox::default);
    let backdrop = use_node_ref();

    // Body scrolling is locked only while the modal is showing
    use_effect_with_deps(
        |open| {
            let open = *open;
            if open {
                if let Err(e) = dom::set_body_scroll_locked(true) {
                    warn!("{}", e);
                }
            }
            move || {
                if open {
                    if let Err(e) = dom::set_body_scroll_locked(false) {
                        warn!("{}", e);
                    }
                }
            }
        },
        lightbox.is_open(),
    );

    let show = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = lightbox.opened() {
                debug!("Opening video lightbox");
                lightbox.set(next);
            }
        })
    };

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = lightbox.clicked(ClickOrigin::CloseControl) {
                lightbox.set(next);
            }
        })
    };

    // current_target is the app root under yew's event delegation
    let backdrop_click = {
        let lightbox = lightbox.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target_dyn_into::<Element>(), backdrop.cast::<Element>()) {
                (Some(target), Some(overlay)) => target == overlay,
                _ => false,
            };
            if let Some(next) = lightbox.clicked(ClickOrigin::from_target(on_backdrop)) {
                lightbox.set(next);
            }
        })
    };

    html! {
        <>
            <div class="video-thumbnail" onclick={show}>
                <img src={props.thumbnail.clone()} alt="Watch our showreel" />
                <span class="play-button">{"▶"}</span>
            </div>
            if lightbox.is_open() {
                <div class="video-modal" ref={backdrop} onclick={backdrop_click}>
                    <div class="modal-content">
                        <span class="close-modal" onclick={close}>{"×"}</span>
                        <iframe
                            width="100%"
                            height="100%"
                            src={video_embed_url(&props.video_id)}
                            frameborder="0"
                            allowfullscreen=true
                        />
                    </div>
                </div>
            }
            <style>
                {r#"
                    .video-modal {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background-color: rgba(0, 0, 0, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 9999;
                    }

                    .modal-content {
                        position: relative;
                        width: 80%;
                        height: 80%;
                        max-width: 900px;
                    }

                    .close-modal {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        color: white;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                "#}
            </style>
        </>
    }
}
