use gloo_timers::callback::Interval;
use yew::Callback;

/// Something that can fire a callback on a fixed period.
///
/// Dropping the returned handle must cancel the schedule.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Callback<()>) -> Self::Handle;
}

/// Browser scheduler backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Callback<()>) -> Interval {
        Interval::new(period_ms, move || tick.emit(()))
    }
}

/// Owns at most one outstanding auto-advance schedule.
pub struct AutoAdvance<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    tick: Callback<()>,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new(scheduler: S, period_ms: u32, tick: Callback<()>) -> Self {
        Self {
            scheduler,
            period_ms,
            tick,
            handle: None,
        }
    }

    pub fn start(&mut self) {
        self.cancel();
        self.handle = Some(self.scheduler.every(self.period_ms, self.tick.clone()));
    }

    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    /// Safe to call when nothing is scheduled.
    pub fn cancel(&mut self) {
        drop(self.handle.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::{tick_counter, ManualClock};

    #[test]
    fn start_schedules_one_timer() {
        let clock = ManualClock::default();
        let (tick, fired) = tick_counter();
        let mut auto = AutoAdvance::new(clock.clone(), 1000, tick);
        assert_eq!(clock.outstanding(), 0);

        auto.start();
        assert_eq!(clock.outstanding(), 1);

        clock.advance(3000);
        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn start_twice_replaces_instead_of_stacking() {
        let clock = ManualClock::default();
        let (tick, fired) = tick_counter();
        let mut auto = AutoAdvance::new(clock.clone(), 1000, tick);

        auto.start();
        auto.start();
        assert_eq!(clock.outstanding(), 1);

        clock.advance(1000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn cancel_is_idempotent() {
        let clock = ManualClock::default();
        let (tick, fired) = tick_counter();
        let mut auto = AutoAdvance::new(clock.clone(), 1000, tick);

        auto.cancel();
        auto.start();
        auto.cancel();
        auto.cancel();
        assert_eq!(clock.outstanding(), 0);

        clock.advance(5000);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn restart_resets_the_cadence() {
        let clock = ManualClock::default();
        let (tick, fired) = tick_counter();
        let mut auto = AutoAdvance::new(clock.clone(), 1000, tick);

        auto.start();
        clock.advance(900);
        auto.restart();
        clock.advance(900);
        assert_eq!(fired.get(), 0);
        clock.advance(100);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropping_cancels() {
        let clock = ManualClock::default();
        let (tick, _fired) = tick_counter();
        let mut auto = AutoAdvance::new(clock.clone(), 1000, tick);
        auto.start();
        drop(auto);
        assert_eq!(clock.outstanding(), 0);
    }
}
