/// Linear count-up from zero to a target over a fixed number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub shown: u32,
    pub finished: bool,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(frame_ms.max(1));
        let increment = if frames > 0.0 { f64::from(target) / frames } else { f64::from(target) };
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    pub fn step(&mut self) -> Frame {
        if self.finished {
            return Frame { shown: self.target, finished: true };
        }
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            Frame {
                shown: self.current.ceil() as u32,
                finished: false,
            }
        } else {
            self.finished = true;
            Frame { shown: self.target, finished: true }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COUNTER_DURATION_MS, FRAME_MS};

    fn run(target: u32) -> Vec<u32> {
        let mut count = CountUp::new(target, COUNTER_DURATION_MS, FRAME_MS);
        let mut shown = Vec::new();
        loop {
            let frame = count.step();
            shown.push(frame.shown);
            if frame.finished {
                return shown;
            }
            assert!(shown.len() < 10_000, "count-up never finished");
        }
    }

    #[test]
    fn ends_exactly_on_target() {
        let shown = run(250);
        assert_eq!(*shown.last().unwrap(), 250);
    }

    #[test]
    fn never_decreases_or_overshoots() {
        let shown = run(1234);
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert!(shown.iter().all(|v| *v <= 1234));
    }

    #[test]
    fn takes_about_duration_over_frame_frames() {
        // 2000 / 16 = 125 increments
        let shown = run(500);
        assert_eq!(shown.len(), 125);
    }

    #[test]
    fn zero_target_finishes_at_once() {
        assert_eq!(run(0), vec![0]);
    }

    #[test]
    fn intermediate_frames_round_up() {
        let mut count = CountUp::new(10, 2000, 16);
        // 10 / 125 = 0.08 per frame, ceil makes the first frame show 1
        assert_eq!(count.step(), Frame { shown: 1, finished: false });
    }

    #[test]
    fn stepping_after_finish_is_stable() {
        let mut count = CountUp::new(3, 16, 16);
        assert_eq!(count.step(), Frame { shown: 3, finished: true });
        assert_eq!(count.step(), Frame { shown: 3, finished: true });
    }
}
