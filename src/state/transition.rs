/// Visibility phases for elements that fade in and out before leaving layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Removed from layout.
    Hidden,
    /// In layout, fading in.
    Appearing,
    /// In layout, fully shown.
    Visible,
    /// Still in layout, fading out.
    Disappearing,
}

/// Per-element transition clock. `advance` is driven by the owner's scheduler tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
    elapsed_ms: u32,
    enter_ms: u32,
    leave_ms: u32,
}

impl Transition {
    pub fn new(phase: Phase, enter_ms: u32, leave_ms: u32) -> Self {
        Self { phase, elapsed_ms: 0, enter_ms, leave_ms }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn show(&mut self) -> bool {
        match self.phase {
            Phase::Hidden | Phase::Disappearing => {
                self.phase = Phase::Appearing;
                self.elapsed_ms = 0;
                true
            }
            Phase::Appearing | Phase::Visible => false,
        }
    }

    pub fn hide(&mut self) -> bool {
        match self.phase {
            Phase::Appearing | Phase::Visible => {
                self.phase = Phase::Disappearing;
                self.elapsed_ms = 0;
                true
            }
            Phase::Hidden | Phase::Disappearing => false,
        }
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Appearing | Phase::Disappearing)
    }

    /// Returns true when the phase changed.
    pub fn advance(&mut self, dt_ms: u32) -> bool {
        let (limit, next) = match self.phase {
            Phase::Appearing => (self.enter_ms, Phase::Visible),
            Phase::Disappearing => (self.leave_ms, Phase::Hidden),
            Phase::Hidden | Phase::Visible => return false,
        };
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= limit {
            self.phase = next;
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn in_layout(&self) -> bool {
        self.phase != Phase::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearing_settles_after_enter_delay() {
        let mut t = Transition::new(Phase::Hidden, 100, 300);
        assert!(t.show());
        assert_eq!(t.phase(), Phase::Appearing);
        assert!(t.in_layout());
        assert!(!t.advance(60));
        assert!(t.advance(40));
        assert_eq!(t.phase(), Phase::Visible);
        assert!(!t.advance(1000));
    }

    #[test]
    fn disappearing_leaves_layout_after_leave_delay() {
        let mut t = Transition::new(Phase::Visible, 100, 300);
        assert!(t.hide());
        assert_eq!(t.phase(), Phase::Disappearing);
        assert!(t.in_layout());
        t.advance(299);
        assert_eq!(t.phase(), Phase::Disappearing);
        t.advance(1);
        assert_eq!(t.phase(), Phase::Hidden);
        assert!(!t.in_layout());
    }

    #[test]
    fn showing_mid_fade_out_restarts_appearance() {
        let mut t = Transition::new(Phase::Visible, 100, 300);
        t.hide();
        t.advance(200);
        assert!(t.show());
        t.advance(200);
        assert_eq!(t.phase(), Phase::Visible);
    }

    #[test]
    fn redundant_requests_are_ignored() {
        let mut t = Transition::new(Phase::Visible, 100, 300);
        assert!(!t.show());
        let mut h = Transition::new(Phase::Hidden, 100, 300);
        assert!(!h.hide());
        assert!(!h.is_settling());
    }
}
