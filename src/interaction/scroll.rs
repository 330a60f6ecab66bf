/// True once the page has scrolled strictly past `threshold` pixels.
pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// An element is in view when its top edge sits above `viewport_height / ratio`.
pub fn in_view(element_top: f64, viewport_height: f64, ratio: f64) -> bool {
    element_top < viewport_height / ratio
}

/// Document offset to scroll to so the target lands just below a fixed header.
pub fn anchor_offset(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height
}

/// Whether clicks on this link are handled in-page, including the bare `#`.
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Selector for an in-page link, or `None` for the bare `#` placeholder
/// and anything that is not a fragment.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href == "#" || !is_in_page(href) {
        return None;
    }
    Some(href)
}
