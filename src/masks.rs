//! Precomputed bit masks indexed by the distance to the leaf

use crate::config::DeBruijnConfig;

/// Upper and set masks for one order, both of length `2^n + 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTable {
    upper: Vec<u64>,
    set: Vec<u64>,
}

impl MaskTable {
    /// Build both tables for the configured order
    pub fn new(config: &DeBruijnConfig) -> Self {
        let len = config.width() as usize + 1;
        let mut upper = Vec::with_capacity(len);
        let mut set = Vec::with_capacity(len);

        for offset in 0..len as u32 {
            //   xxvvvvvv..
            // & 1111111100
            upper.push(u64::MAX.checked_shl(offset).unwrap_or(0));
            //   xxvvvvvv..
            // | 0000000010
            set.push(match offset {
                0 => 0,
                _ => 1u64.checked_shl(offset - 1).unwrap_or(0),
            });
        }

        Self { upper, set }
    }

    /// Mask preserving only bits at positions `>= offset`
    #[inline(always)]
    pub fn upper(&self, offset: u32) -> u64 {
        self.upper[offset as usize]
    }

    /// Mask with the single bit at position `offset - 1`
    #[inline(always)]
    pub fn set(&self, offset: u32) -> u64 {
        self.set[offset as usize]
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }
}
