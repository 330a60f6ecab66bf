use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::HEADER_ID;
use crate::error::{Result, SiteError};
use crate::interaction::scroll;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn scroll_y() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64> {
    let height = window()?.inner_height()?;
    height
        .as_f64()
        .ok_or_else(|| SiteError::Js("innerHeight is not a number".to_string()))
}

fn smooth_scroll(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_to_top() -> Result<()> {
    smooth_scroll(0.0)
}

/// Smooth-scrolls to the element matching `selector`, leaving room for the
/// fixed header.
pub fn scroll_to_anchor(selector: &str) -> Result<()> {
    let document = document()?;
    let target = document
        .query_selector(selector)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))?;
    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    let top = scroll::anchor_offset(target.get_bounding_client_rect().top(), scroll_y()?, header_height);
    smooth_scroll(top)
}

pub fn alert(message: &str) -> Result<()> {
    Ok(window()?.alert_with_message(message)?)
}

/// Locks or unlocks page scrolling behind an overlay.
pub fn set_body_scroll_locked(locked: bool) -> Result<()> {
    let body = document()?.body().ok_or(SiteError::MissingElement("body".to_string()))?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

/// A `scroll` listener on the window that is removed when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Registers `on_scroll` and runs it once so the initial position is applied.
    pub fn attach<F>(on_scroll: F) -> Result<Self>
    where
        F: Fn() + 'static,
    {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(on_scroll);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        let listener = Self { window, callback };
        listener
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&wasm_bindgen::JsValue::NULL)?;
        Ok(listener)
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
