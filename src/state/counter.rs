use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// Count-up from zero to `target`, one step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        let frames = (COUNTER_DURATION_MS / COUNTER_FRAME_MS) as f64;
        Self { target, increment: target as f64 / frames, current: 0.0, finished: false }
    }

    /// Advance one frame and return the value to display.
    pub fn tick(&mut self) -> u32 {
        if self.finished {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u32) -> Vec<u32> {
        let mut anim = CounterAnimation::new(target);
        let mut shown = Vec::new();
        while !anim.is_finished() {
            shown.push(anim.tick());
            assert!(shown.len() < 10_000, "counter never finished");
        }
        shown
    }

    #[test]
    fn ends_exactly_on_target_without_going_back() {
        for target in [1, 7, 42, 125, 999, 25_000] {
            let shown = run(target);
            assert_eq!(*shown.last().unwrap(), target);
            assert!(shown.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(shown.iter().all(|v| *v <= target));
        }
    }

    #[test]
    fn takes_about_the_configured_duration() {
        let frames = (COUNTER_DURATION_MS / COUNTER_FRAME_MS) as usize;
        let shown = run(500);
        assert!(shown.len() >= frames && shown.len() <= frames + 1);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(run(0), vec![0]);
    }

    #[test]
    fn ticks_after_finish_hold_target() {
        let mut anim = CounterAnimation::new(3);
        while !anim.is_finished() {
            anim.tick();
        }
        assert_eq!(anim.tick(), 3);
    }
}
