//! DeBruijnConfig builder for constructing configuration

use super::DeBruijnConfig;
use crate::error::DeBruijnError;

/// Default configuration values
pub(super) const DEFAULT_ORDER: u8 = 6;

/// Builder for DeBruijnConfig
#[derive(Debug)]
pub struct DeBruijnConfigBuilder {
    pub(super) order: u64,
}

impl DeBruijnConfigBuilder {
    /// Create a new DeBruijnConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            order: DEFAULT_ORDER as u64,
        }
    }

    /// Set the order `n` (1-6)
    pub fn order(mut self, order: u64) -> Result<Self, DeBruijnError> {
        DeBruijnConfig::validate_order(order)?;
        self.order = order;
        Ok(self)
    }

    /// Build the final DeBruijnConfig
    pub fn build(self) -> DeBruijnConfig {
        DeBruijnConfig::build(self.order as u8)
    }
}

impl Default for DeBruijnConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
