// Stepper state.
// Single owner of the current step: section visibility, indicator state, and
// navigation control state all derive from it.

/// Navigation control state for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    /// Previous control is hidden on the first step.
    pub prev_visible: bool,
    /// Label for the next control ("Finish" on the last step).
    pub next_label: &'static str,
}

/// Owns the single "current step" integer for the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    current: usize,
    total: usize,
}

impl Stepper {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.total == 0 || self.current == self.total - 1
    }

    /// Jump to a step, clamping out-of-range indices into bounds.
    ///
    /// Returns true if the current step changed.
    pub fn go_to(&mut self, step: usize) -> bool {
        if self.total == 0 {
            return false;
        }
        let clamped = step.min(self.total - 1);
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }

    /// Move to the next step; no-op at the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.current + 1)
    }

    /// Move to the previous step; no-op at step 0.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.go_to(self.current - 1)
    }

    /// Whether the section at `index` is the visible one.
    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    /// Whether the step indicator at `index` carries the active style.
    /// Only the current step is marked.
    pub fn indicator_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Navigation control state derived from the current step.
    pub fn nav(&self) -> NavControls {
        NavControls {
            prev_visible: !self.is_first(),
            next_label: if self.is_last() { "Finish" } else { "Next" },
        }
    }
}
