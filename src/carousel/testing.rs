//! Manual clock for driving carousel timers in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::Callback;

use super::timer::Scheduler;

struct Entry {
    id: u64,
    period_ms: u32,
    due_at: u64,
    tick: Callback<()>,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualHandle {
    id: u64,
    state: Rc<RefCell<ClockState>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().entries.retain(|entry| entry.id != self.id);
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn every(&self, period_ms: u32, tick: Callback<()>) -> ManualHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due_at = state.now + u64::from(period_ms);
        state.entries.push(Entry {
            id,
            period_ms,
            due_at,
            tick,
        });
        ManualHandle {
            id,
            state: self.state.clone(),
        }
    }
}

impl ManualClock {
    pub fn outstanding(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Moves time forward, firing every due tick in chronological order.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let due = {
                let mut guard = self.state.borrow_mut();
                let state = &mut *guard;
                let next = state
                    .entries
                    .iter_mut()
                    .filter(|entry| entry.due_at <= target)
                    .min_by_key(|entry| (entry.due_at, entry.id));
                match next {
                    Some(entry) => {
                        let fired_at = entry.due_at;
                        entry.due_at += u64::from(entry.period_ms);
                        let tick = entry.tick.clone();
                        state.now = fired_at;
                        Some(tick)
                    }
                    None => None,
                }
            };
            match due {
                Some(tick) => tick.emit(()),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

pub fn tick_counter() -> (Callback<()>, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let tick = Callback::from(move |_| counter.set(counter.get() + 1));
    (tick, fired)
}
