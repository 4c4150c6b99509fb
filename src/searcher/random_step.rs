//! Traversal with branch order decided by a random bit source

use super::{Flow, TreeSearcher};
use crate::random::RandomBitSource;

impl<F> TreeSearcher<F>
where
    F: FnMut(u64) -> bool,
{
    /// Same as `step`, but one bit from `bits` decides which child goes first
    pub(super) fn random_step(
        &mut self,
        bits: &mut dyn RandomBitSource,
        value: u64,
        window: u64,
        offset: u32,
    ) -> Flow {
        if offset == 0 {
            return self.leaf(value);
        }
        self.stats.internal_nodes += 1;

        let mut children = self.children(value, window, offset);
        if bits.bit() {
            children.swap(0, 1);
        }
        let [first, second] = children;

        let flow = self.visit(first.window, |s| {
            s.random_step(&mut *bits, first.value, first.window, offset - 1)
        });
        if flow.is_stop() {
            return Flow::Stop;
        }

        self.visit(second.window, |s| {
            s.random_step(&mut *bits, second.value, second.window, offset - 1)
        })
    }
}
