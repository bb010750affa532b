/// Trailing debounce over a millisecond clock: every call pushes the deadline back, and a
/// burst of calls fires once, `wait_ms` after the last of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms: wait_ms as f64, deadline: None }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms as u32
    }

    /// Pending deadline, if a call is waiting to fire.
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn call(&mut self, now: f64) {
        self.deadline = Some(now + self.wait_ms);
    }

    /// True once per burst, the first time `now` reaches the pending deadline.
    pub fn fire_due(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay `calls` against a 1 ms clock up to `until`, returning the fire times.
    fn replay(wait_ms: u32, calls: &[u32], until: u32) -> Vec<u32> {
        let mut d = Debounce::new(wait_ms);
        let mut fired = Vec::new();
        for now in 0..=until {
            if calls.contains(&now) {
                d.call(now as f64);
            }
            if d.fire_due(now as f64) {
                fired.push(now);
            }
        }
        fired
    }

    #[test]
    fn burst_within_window_fires_once() {
        assert_eq!(replay(10, &[0, 2, 4, 6, 8, 9], 100), vec![19]);
    }

    #[test]
    fn call_after_window_fires_again() {
        assert_eq!(replay(10, &[0, 3, 40, 45], 100), vec![13, 55]);
    }

    #[test]
    fn not_due_before_deadline() {
        let mut d = Debounce::new(10);
        d.call(100.0);
        assert!(!d.fire_due(105.0));
        assert_eq!(d.deadline(), Some(110.0));
        assert!(d.fire_due(110.0));
        assert!(!d.fire_due(111.0));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn cancel_drops_pending_call() {
        let mut d = Debounce::new(10);
        d.call(0.0);
        d.cancel();
        assert!(!d.fire_due(50.0));
    }
}
