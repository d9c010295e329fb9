/// Default fraction of a section that must be on screen before it counts as entered.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Slack for observers that report a crossing just under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Still waiting for the section to come into view.
    Pending,
    /// This event flipped the flag; the observer should detach.
    Entered,
    /// The flag was already set. Nothing to do.
    Done,
}

/// One-shot visibility flag for a single section.
///
/// The flag only ever goes from `false` to `true`. Events that arrive after
/// that are ignored, so late callbacks from a detaching observer are harmless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    entered: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            entered: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn entered(&self) -> bool {
        self.entered
    }

    pub fn observe(&mut self, ratio: f64) -> Observation {
        if self.entered {
            Observation::Done
        } else if ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.threshold {
            self.entered = true;
            Observation::Entered
        } else {
            Observation::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enters_at_threshold() {
        let mut latch = VisibilityLatch::default();
        assert_eq!(latch.observe(0.0), Observation::Pending);
        assert_eq!(latch.observe(0.05), Observation::Pending);
        assert!(!latch.entered());
        assert_eq!(latch.observe(0.1), Observation::Entered);
        assert!(latch.entered());
    }

    #[test]
    fn test_enters_on_crossing_reported_just_below_threshold() {
        let mut latch = VisibilityLatch::default();
        assert_eq!(latch.observe(0.0999), Observation::Entered);

        let mut latch = VisibilityLatch::new(0.5);
        assert_eq!(latch.observe(0.49), Observation::Pending);
        assert_eq!(latch.observe(0.4995), Observation::Entered);
    }

    #[test]
    fn test_never_reverts() {
        let mut latch = VisibilityLatch::new(0.5);
        let events = [0.2, 0.6, 0.0, 1.0, 0.0, 0.3];
        let mut flips = 0;
        let mut history = Vec::new();
        for ratio in events {
            if latch.observe(ratio) == Observation::Entered {
                flips += 1;
            }
            history.push(latch.entered());
        }
        assert_eq!(flips, 1);
        assert_eq!(history, vec![false, true, true, true, true, true]);
    }

    #[test]
    fn test_latches_are_independent() {
        let mut hero = VisibilityLatch::default();
        let about = VisibilityLatch::default();
        hero.observe(1.0);
        assert!(hero.entered());
        assert!(!about.entered());
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut latch = VisibilityLatch::new(0.0);
        assert_eq!(latch.observe(0.0), Observation::Pending);
        assert_eq!(latch.observe(0.01), Observation::Entered);
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(VisibilityLatch::new(2.0).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-1.0).threshold(), 0.0);
    }
}
