//! Configuration for a single de Bruijn search order

mod builder;

pub use builder::DeBruijnConfigBuilder;
use builder::DEFAULT_ORDER;

use crate::error::DeBruijnError;

/// Smallest supported order
pub const MIN_ORDER: u64 = 1;

/// Largest supported order; 2^6 bits saturate the `u64` accumulator
pub const MAX_ORDER: u64 = 6;

/// Validated order `n` together with the constants derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeBruijnConfig {
    order: u8,
    width: u32,
    window_mask: u64,
    sequence_mask: u64,
}

impl DeBruijnConfig {
    /// Create a configuration for order `n`
    ///
    /// # Returns
    /// * `Result<DeBruijnConfig, DeBruijnError>` - `OutOfRange` if `n` is not in `[1, 6]`
    pub fn new(order: u64) -> Result<Self, DeBruijnError> {
        Self::validate_order(order)?;
        Ok(Self::build(order as u8))
    }

    /// Create a new configuration builder
    pub fn builder() -> DeBruijnConfigBuilder {
        DeBruijnConfigBuilder::new()
    }

    pub(crate) fn validate_order(order: u64) -> Result<(), DeBruijnError> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(DeBruijnError::OutOfRange { value: order });
        }
        Ok(())
    }

    const fn build(order: u8) -> Self {
        let width = 1u32 << order;
        Self {
            order,
            width,
            window_mask: (1u64 << order) - 1,
            sequence_mask: Self::calculate_mask(width),
        }
    }

    /// Mask with the low `bits` bits set, saturating at 64
    #[inline]
    pub(crate) const fn calculate_mask(bits: u32) -> u64 {
        if bits >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        }
    }

    /// Order `n`: the length of every window
    #[inline(always)]
    pub const fn order(&self) -> u64 {
        self.order as u64
    }

    /// Length of the cyclic sequence in bits, `2^n`
    #[inline(always)]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask selecting one n-bit window
    #[inline(always)]
    pub const fn window_mask(&self) -> u64 {
        self.window_mask
    }

    /// Mask selecting the low `2^n` bits that hold a sequence
    #[inline(always)]
    pub const fn sequence_mask(&self) -> u64 {
        self.sequence_mask
    }

    /// Number of bit positions the search has to fill, `2^n - n`
    #[inline(always)]
    pub const fn start_offset(&self) -> u32 {
        self.width - self.order as u32
    }

    /// Cardinality of B(2, n) under the all-zero anchor, `2^(2^(n-1) - n)`
    #[inline(always)]
    pub const fn expected_count(&self) -> u64 {
        1u64 << ((self.width >> 1) - self.order as u32)
    }
}

impl Default for DeBruijnConfig {
    fn default() -> Self {
        Self::build(DEFAULT_ORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_orders() {
        for order in MIN_ORDER..=MAX_ORDER {
            let config = DeBruijnConfig::new(order).unwrap();
            assert_eq!(config.order(), order);
            assert_eq!(config.width(), 1 << order);
        }
    }

    #[test]
    fn test_invalid_orders() {
        assert_eq!(
            DeBruijnConfig::new(0).unwrap_err(),
            DeBruijnError::OutOfRange { value: 0 }
        );
        assert_eq!(
            DeBruijnConfig::new(7).unwrap_err(),
            DeBruijnError::OutOfRange { value: 7 }
        );
        assert_eq!(
            DeBruijnConfig::new(u64::MAX).unwrap_err(),
            DeBruijnError::OutOfRange { value: u64::MAX }
        );
    }

    #[test]
    fn test_derived_constants() {
        let config = DeBruijnConfig::new(4).unwrap();
        assert_eq!(config.window_mask(), 0xF);
        assert_eq!(config.sequence_mask(), 0xFFFF);
        assert_eq!(config.start_offset(), 12);
        assert_eq!(config.expected_count(), 16);
    }

    #[test]
    fn test_saturated_sequence_mask() {
        let config = DeBruijnConfig::new(6).unwrap();
        assert_eq!(config.sequence_mask(), u64::MAX);
        assert_eq!(config.start_offset(), 58);
        assert_eq!(config.expected_count(), 1 << 26);
    }

    #[test]
    fn test_default_config() {
        let config = DeBruijnConfig::default();
        assert_eq!(config.order(), MAX_ORDER);
        assert_eq!(config, DeBruijnConfig::new(MAX_ORDER).unwrap());
    }
}
