//! Integer log2 of powers of two through a de Bruijn multiply-and-shift
//!
//! Multiplying a sequence by `2^j` shifts window `j` into the top `n` bits of
//! the `2^n`-bit accumulator, so a table indexed by that window maps every
//! power of two below `2^(2^n)` back to its exponent.

use crate::config::DeBruijnConfig;
use crate::extractor::WindowExtractor;

/// Lookup table built from one B(2, n) sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log2Table {
    config: DeBruijnConfig,
    sequence: u64,
    table: Vec<u8>,
}

impl Log2Table {
    /// Build the table for `sequence`
    ///
    /// Returns `None` unless `sequence` is a B(2, n) sequence whose windows
    /// stay distinct when read without wrapping around, which holds for every
    /// search result since they start with `n - 1` zero bits.
    pub fn new(config: DeBruijnConfig, sequence: u64) -> Option<Self> {
        if !WindowExtractor::new(config).is_de_bruijn(sequence) {
            return None;
        }

        let mut log2 = Self {
            config,
            sequence,
            table: vec![0; config.width() as usize],
        };
        let mut filled = vec![false; config.width() as usize];
        for exponent in 0..config.width() {
            let index = log2.index(1u64 << exponent);
            if filled[index] {
                return None;
            }
            filled[index] = true;
            log2.table[index] = exponent as u8;
        }
        Some(log2)
    }

    #[inline(always)]
    fn index(&self, power: u64) -> usize {
        let product = power.wrapping_mul(self.sequence) & self.config.sequence_mask();
        (product >> (self.config.width() - self.config.order() as u32)) as usize
    }

    /// Exponent `j` of `power = 2^j`
    ///
    /// `power` must be a power of two below `2^(2^n)`; any other input returns
    /// an arbitrary exponent.
    #[inline]
    pub fn log2(&self, power: u64) -> u8 {
        self.table[self.index(power)]
    }

    /// Sequence the table was built from
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }
}
