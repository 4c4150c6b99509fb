//! Public entry points for enumerating and sampling B(2, n)

use crate::config::DeBruijnConfig;
use crate::error::DeBruijnError;
use crate::random::RandomBitSource;
use crate::searcher::TreeSearcher;

/// Enumerate B(2, n) de Bruijn sequences in a fixed order
///
/// # Arguments
///
/// * `order` - Length `n` of every window, in `[1, 6]`
/// * `on_found` - Called with every sequence found; returning `true` stops the search
///
/// Each sequence is passed as a `u64` whose low `2^n` bits hold the cyclic
/// sequence, most significant bit first. It starts with `n - 1` zero bits and
/// ends with a 1 bit.
///
/// # Returns
/// * `Result<(), DeBruijnError>` - `OutOfRange` if `order` is not in `[1, 6]`
pub fn search<F>(order: u64, on_found: F) -> Result<(), DeBruijnError>
where
    F: FnMut(u64) -> bool,
{
    let config = DeBruijnConfig::new(order)?;
    search_with_config(config, on_found);
    Ok(())
}

/// Same as [`search`] for an already validated configuration
pub fn search_with_config<F>(config: DeBruijnConfig, on_found: F)
where
    F: FnMut(u64) -> bool,
{
    TreeSearcher::new(config, on_found).run();
}

/// Enumerate B(2, n) with branch order decided by `source`
///
/// Every internal node visited draws one bit from `source`. The set of
/// sequences is the same as with [`search`]; only the order changes, so
/// stopping at the first one samples a random sequence.
///
/// # Returns
/// * `Result<(), DeBruijnError>` - `MissingRandomSource` if `source` is `None`,
///   `OutOfRange` if `order` is not in `[1, 6]`
pub fn random_search<F>(
    order: u64,
    source: Option<&mut dyn RandomBitSource>,
    on_found: F,
) -> Result<(), DeBruijnError>
where
    F: FnMut(u64) -> bool,
{
    let source = source.ok_or(DeBruijnError::MissingRandomSource)?;
    let config = DeBruijnConfig::new(order)?;
    random_search_with_config(config, source, on_found);
    Ok(())
}

/// Same as [`random_search`] for an already validated configuration
pub fn random_search_with_config<F>(
    config: DeBruijnConfig,
    source: &mut dyn RandomBitSource,
    on_found: F,
) where
    F: FnMut(u64) -> bool,
{
    TreeSearcher::new(config, on_found).run_random(source);
}

/// Collect every sequence of order `n` in traversal order
pub fn collect(order: u64) -> Result<Vec<u64>, DeBruijnError> {
    let config = DeBruijnConfig::new(order)?;
    let mut found = Vec::with_capacity(config.expected_count() as usize);
    search_with_config(config, |sequence| {
        found.push(sequence);
        false
    });
    Ok(found)
}

/// Count the sequences of order `n` by exhausting the tree
pub fn count(order: u64) -> Result<u64, DeBruijnError> {
    let config = DeBruijnConfig::new(order)?;
    let stats = TreeSearcher::new(config, |_| false).run();
    Ok(stats.reported)
}

/// First sequence of order `n` in fixed branch order
pub fn first(order: u64) -> Result<Option<u64>, DeBruijnError> {
    let mut first = None;
    search(order, |sequence| {
        first = Some(sequence);
        true
    })?;
    Ok(first)
}

/// Draw one sequence of order `n` using `source` for every branch decision
pub fn sample(order: u64, source: &mut dyn RandomBitSource) -> Result<u64, DeBruijnError> {
    let config = DeBruijnConfig::new(order)?;
    // Every valid order has at least one sequence, so this is always overwritten
    let mut sampled = 0;
    random_search_with_config(config, source, |sequence| {
        sampled = sequence;
        true
    });
    Ok(sampled)
}
