//! # debruijn
//!
//! Enumerate or randomly sample binary de Bruijn sequences B(2, n) for
//! `1 <= n <= 6`.
//!
//! A B(2, n) sequence is a cyclic string of `2^n` bits in which every n-bit
//! window occurs exactly once. Sequences are found by a backtracking search
//! and handed to a callback as a `u64`, most significant bit first:
//!
//! ```
//! let mut found = Vec::new();
//! debruijn::search(3, |sequence| {
//!     found.push(sequence);
//!     false // keep going
//! })
//! .unwrap();
//!
//! assert_eq!(found, vec![0b0001_0111, 0b0001_1101]);
//! ```
//!
//! Stopping a randomized search at its first hit samples one sequence:
//!
//! ```
//! use debruijn::BufferedBitSource;
//!
//! let mut bits = BufferedBitSource::new(rand::rng());
//! let sequence = debruijn::sample(6, &mut bits).unwrap();
//! assert!(debruijn::Log2Table::new(debruijn::DeBruijnConfig::new(6).unwrap(), sequence).is_some());
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod log2;
mod masks;
mod random;
mod search;
mod searcher;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{DeBruijnConfig, DeBruijnConfigBuilder, MAX_ORDER, MIN_ORDER};
pub use error::DeBruijnError;
pub use extractor::WindowExtractor;
pub use log2::Log2Table;
pub use masks::MaskTable;
pub use random::{BufferedBitSource, RandomBitSource};
pub use search::{
    collect, count, first, random_search, random_search_with_config, sample, search,
    search_with_config,
};
