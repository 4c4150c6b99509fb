use thiserror::Error;

/// Represents errors that can occur when starting a de Bruijn search
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeBruijnError {
    /// Error when the requested order is outside of the supported range
    #[error("n must be in range [1, 6] got: {value}")]
    OutOfRange { value: u64 },
    /// Error when the randomized search is started without a random source
    #[error("random source must be provided")]
    MissingRandomSource,
}
