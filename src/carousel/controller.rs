use yew::Callback;

use super::timer::{AutoAdvance, Scheduler};
use super::track::Track;

/// A slide track plus its auto-advance timer.
///
/// User navigation (`next`, `prev`, `select`) restarts the timer so an
/// automatic tick never lands right after a manual move. Timer ticks go
/// through `tick`, which advances without touching the schedule.
pub struct Carousel<S: Scheduler> {
    track: Track,
    timer: AutoAdvance<S>,
}

impl<S: Scheduler> Carousel<S> {
    /// Builds the carousel and starts auto-advance. Zero slides yields
    /// `None` with nothing scheduled.
    pub fn new(len: usize, period_ms: u32, scheduler: S, tick: Callback<()>) -> Option<Self> {
        let track = Track::new(len)?;
        let mut timer = AutoAdvance::new(scheduler, period_ms, tick);
        timer.start();
        Some(Self { track, timer })
    }

    pub fn len(&self) -> usize {
        self.track.len()
    }

    pub fn active(&self) -> usize {
        self.track.active()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.track.is_active(index)
    }

    pub fn tick(&mut self) {
        self.track.advance();
    }

    pub fn next(&mut self) {
        self.track.advance();
        self.timer.restart();
    }

    pub fn prev(&mut self) {
        self.track.retreat();
        self.timer.restart();
    }

    pub fn select(&mut self, index: usize) {
        self.track.jump_to(index);
        self.timer.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::{tick_counter, ManualClock};

    fn carousel(len: usize, period_ms: u32) -> (Carousel<ManualClock>, ManualClock, std::rc::Rc<std::cell::Cell<u32>>) {
        let clock = ManualClock::default();
        let (tick, fired) = tick_counter();
        let carousel = Carousel::new(len, period_ms, clock.clone(), tick).unwrap();
        (carousel, clock, fired)
    }

    #[test]
    fn zero_slides_schedules_nothing() {
        let clock = ManualClock::default();
        let (tick, fired) = tick_counter();
        assert!(Carousel::new(0, 5000, clock.clone(), tick).is_none());
        assert_eq!(clock.outstanding(), 0);
        clock.advance(60_000);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn construction_activates_first_slide_and_starts_timer() {
        let (carousel, clock, _) = carousel(3, 5000);
        assert_eq!(carousel.active(), 0);
        assert_eq!(carousel.len(), 3);
        assert_eq!(clock.outstanding(), 1);
    }

    #[test]
    fn ticks_advance_on_the_period() {
        let (mut carousel, clock, fired) = carousel(3, 5000);
        clock.advance(4999);
        assert_eq!(fired.get(), 0);
        clock.advance(1);
        assert_eq!(fired.get(), 1);
        carousel.tick();
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn manual_navigation_leaves_a_single_timer() {
        let (mut carousel, clock, fired) = carousel(5, 5000);
        clock.advance(3000);

        carousel.next();
        assert_eq!(clock.outstanding(), 1);

        // Old schedule would have fired at 5000, the new one fires at 8000
        clock.advance(5000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn repeated_clicks_do_not_accelerate_auto_advance() {
        let (mut carousel, clock, fired) = carousel(4, 6000);
        for _ in 0..10 {
            carousel.prev();
            carousel.select(1);
            carousel.next();
        }
        assert_eq!(clock.outstanding(), 1);
        clock.advance(6000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn select_marks_exactly_one_slide() {
        let (mut carousel, _, _) = carousel(5, 5000);
        carousel.next();
        carousel.select(2);
        assert_eq!(carousel.active(), 2);
        let active: Vec<usize> = (0..carousel.len()).filter(|i| carousel.is_active(*i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let (mut carousel, _, _) = carousel(3, 5000);
        carousel.prev();
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn tick_keeps_existing_schedule() {
        let (mut carousel, clock, fired) = carousel(3, 1000);
        clock.advance(500);
        carousel.tick();
        clock.advance(500);
        assert_eq!(fired.get(), 1);
        assert_eq!(clock.outstanding(), 1);
    }
}
