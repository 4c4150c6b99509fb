//! Fixed-order traversal

use super::{Flow, TreeSearcher};

impl<F> TreeSearcher<F>
where
    F: FnMut(u64) -> bool,
{
    /// Depth-first step at `offset` positions above the leaves, 0-branch first
    pub(super) fn step(&mut self, value: u64, window: u64, offset: u32) -> Flow {
        if offset == 0 {
            return self.leaf(value);
        }
        self.stats.internal_nodes += 1;

        let [zero, one] = self.children(value, window, offset);

        let flow = self.visit(zero.window, |s| s.step(zero.value, zero.window, offset - 1));
        if flow.is_stop() {
            return Flow::Stop;
        }

        self.visit(one.window, |s| s.step(one.value, one.window, offset - 1))
    }
}
