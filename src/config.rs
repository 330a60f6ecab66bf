use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Carousels
pub const HERO_PERIOD_MS: u32 = 5000;
pub const TESTIMONIAL_PERIOD_MS: u32 = 6000;

// Scroll thresholds, in CSS pixels of window.scrollY
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

// An element counts as in view once its top is above innerHeight / ratio
pub const COUNTER_VIEW_RATIO: f64 = 1.3;
pub const REVEAL_VIEW_RATIO: f64 = 1.2;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const FRAME_MS: u32 = 16;

pub const HEADER_ID: &str = "header";

pub const FORM_SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
pub const FORM_INVALID_MESSAGE: &str = "Please fill in all required fields.";

pub fn video_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_autoplays_given_video() {
        assert_eq!(
            video_embed_url("abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1"
        );
    }

    #[test]
    fn testimonial_cadence_is_slower_than_hero() {
        assert!(TESTIMONIAL_PERIOD_MS > HERO_PERIOD_MS);
    }
}
