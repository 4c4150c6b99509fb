use crate::config::DeBruijnConfig;

/// Reads n-bit windows out of a found sequence
#[derive(Debug, Copy, Clone)]
pub struct WindowExtractor {
    config: DeBruijnConfig,
}

impl WindowExtractor {
    /// Create a new extractor for the given order
    pub fn new(config: DeBruijnConfig) -> Self {
        Self { config }
    }

    /// Rotate the `2^n`-bit sequence left by `shift` positions
    #[inline]
    fn rotate(&self, sequence: u64, shift: u32) -> u64 {
        let width = self.config.width();
        let sequence = sequence & self.config.sequence_mask();
        let shift = shift % width;
        if shift == 0 {
            return sequence;
        }
        ((sequence << shift) | (sequence >> (width - shift))) & self.config.sequence_mask()
    }

    /// Window starting `position` bits below the most significant bit, read cyclically
    #[inline]
    pub fn window(&self, sequence: u64, position: u32) -> u64 {
        let drop = self.config.width() - self.config.order() as u32;
        (self.rotate(sequence, position) >> drop) & self.config.window_mask()
    }

    /// All `2^n` windows of a sequence in order of position
    pub fn windows(&self, sequence: u64) -> Vec<u64> {
        (0..self.config.width())
            .map(|position| self.window(sequence, position))
            .collect()
    }

    /// Check that `sequence` fits in `2^n` bits and contains every window once
    pub fn is_de_bruijn(&self, sequence: u64) -> bool {
        if sequence & !self.config.sequence_mask() != 0 {
            return false;
        }

        let mut seen = vec![false; self.config.width() as usize];
        for position in 0..self.config.width() {
            let window = self.window(sequence, position) as usize;
            if seen[window] {
                return false;
            }
            seen[window] = true;
        }
        true
    }
}
