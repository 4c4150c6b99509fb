//! Backtracking search over the implicit binary decision tree
//!
//! Split into modules for testability:
//! - `seen` - Visited-window set for the current path
//! - `step` - Fixed-order traversal (0-branch first)
//! - `random_step` - Traversal with branch order drawn from a bit source
//!
//! There are no tree nodes in memory: a node is identified by the window of
//! the last n bits placed and by its offset, the distance to the leaf level.

mod random_step;
mod seen;
mod step;

use log::{debug, trace};

use crate::config::DeBruijnConfig;
use crate::masks::MaskTable;
use crate::random::RandomBitSource;

pub(crate) use seen::SeenSet;

/// Whether the traversal should go on after a subtree returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

impl Flow {
    #[inline(always)]
    pub(crate) const fn is_stop(self) -> bool {
        matches!(self, Flow::Stop)
    }
}

/// Counters collected during one traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Internal nodes entered
    pub(crate) internal_nodes: u64,
    /// Leaves reached, including those rejected by the parity check
    pub(crate) leaves: u64,
    /// Sequences handed to the callback
    pub(crate) reported: u64,
    /// Set when the callback asked to stop
    pub(crate) stopped: bool,
}

/// One candidate child of an internal node
#[derive(Debug, Clone, Copy)]
struct Child {
    value: u64,
    window: u64,
}

/// Owns every piece of mutable state of a single search
pub(crate) struct TreeSearcher<F> {
    config: DeBruijnConfig,
    masks: MaskTable,
    seen: SeenSet,
    on_found: F,
    stats: SearchStats,
}

impl<F> TreeSearcher<F>
where
    F: FnMut(u64) -> bool,
{
    pub(crate) fn new(config: DeBruijnConfig, on_found: F) -> Self {
        Self {
            masks: MaskTable::new(&config),
            seen: SeenSet::anchored(config.width() as usize),
            config,
            on_found,
            stats: SearchStats::default(),
        }
    }

    /// Explore the whole tree with the 0-branch first
    pub(crate) fn run(mut self) -> SearchStats {
        debug!(
            "search(order={}) starting at offset {}",
            self.config.order(),
            self.config.start_offset()
        );
        self.step(0, 0, self.config.start_offset());
        self.finish()
    }

    /// Explore the whole tree drawing one bit per internal node to order branches
    pub(crate) fn run_random(mut self, bits: &mut dyn RandomBitSource) -> SearchStats {
        debug!(
            "random_search(order={}) starting at offset {}",
            self.config.order(),
            self.config.start_offset()
        );
        self.random_step(bits, 0, 0, self.config.start_offset());
        self.finish()
    }

    fn finish(self) -> SearchStats {
        debug_assert_eq!(self.seen.count(), 1, "only the anchor window stays marked");
        let stats = self.stats;
        debug!(
            "search(order={}) done: {} sequences, {} leaves, {} internal nodes{}",
            self.config.order(),
            stats.reported,
            stats.leaves,
            stats.internal_nodes,
            if stats.stopped { ", stopped by callback" } else { "" }
        );
        stats
    }

    /// Children of the node at (`value`, `window`, `offset`) in 0, 1 order
    #[inline(always)]
    fn children(&self, value: u64, window: u64, offset: u32) -> [Child; 2] {
        let value0 = value & self.masks.upper(offset);

        // window
        // vvvvvv
        // _xxxxx0
        //  ^^^^^^
        //  next window
        let window0 = (window << 1) & self.config.window_mask();

        [
            Child {
                value: value0,
                window: window0,
            },
            Child {
                value: value0 | self.masks.set(offset),
                window: window0 | 1,
            },
        ]
    }

    /// Run `explore` with `window` marked visited, skipping it if already on the path
    #[inline(always)]
    fn visit(&mut self, window: u64, explore: impl FnOnce(&mut Self) -> Flow) -> Flow {
        if !self.seen.mark(window) {
            return Flow::Continue;
        }
        let flow = explore(self);
        self.seen.unmark(window);
        flow
    }

    fn leaf(&mut self, value: u64) -> Flow {
        self.stats.leaves += 1;

        // A valid fill under the zero anchor ends with a 1 bit
        if value & 1 == 0 {
            return Flow::Continue;
        }

        self.stats.reported += 1;
        trace!("found {:#x}", value);

        if (self.on_found)(value) {
            self.stats.stopped = true;
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}
