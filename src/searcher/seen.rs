//! Visited-window bookkeeping for one root-to-leaf path

/// One flag per n-bit window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenSet(Vec<bool>);

impl SeenSet {
    /// Create the set for `len` windows with window 0 already marked
    pub fn anchored(len: usize) -> Self {
        let mut seen = vec![false; len];
        seen[0] = true;
        Self(seen)
    }

    #[inline(always)]
    pub fn contains(&self, window: u64) -> bool {
        self.0[window as usize]
    }

    /// Mark `window`; returns false if it was already marked
    #[inline(always)]
    pub fn mark(&mut self, window: u64) -> bool {
        if self.contains(window) {
            return false;
        }
        self.0[window as usize] = true;
        true
    }

    #[inline(always)]
    pub fn unmark(&mut self, window: u64) {
        self.0[window as usize] = false;
    }

    /// Number of windows currently marked
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&seen| seen).count()
    }
}
