use std::collections::HashSet;

use test_log::test;

use super::test_utils::{assert_de_bruijn, expected_count, seeded_source, CountingSource};
use crate::searcher::TreeSearcher;
use crate::*;

#[test]
fn test_sample_is_valid() {
    for seed in 0..20 {
        let mut bits = seeded_source(seed);
        for order in 1..=6 {
            let sequence = sample(order, &mut bits).unwrap();
            assert_de_bruijn(order, sequence);
        }
    }
}

#[test]
fn test_sample_with_thread_rng() {
    let mut bits = BufferedBitSource::new(rand::rng());
    let sequence = sample(6, &mut bits).unwrap();
    assert_de_bruijn(6, sequence);
}

#[test]
fn test_random_search_visits_same_set() {
    for order in 1..=5 {
        let mut bits = seeded_source(order);
        let mut found = Vec::new();
        random_search(order, Some(&mut bits), |sequence| {
            found.push(sequence);
            false
        })
        .unwrap();

        assert_eq!(found.len() as u64, expected_count(order));
        let randomized: HashSet<u64> = found.into_iter().collect();
        let fixed: HashSet<u64> = collect(order).unwrap().into_iter().collect();
        assert_eq!(randomized, fixed);
    }
}

#[test]
fn test_seed_reproducible() {
    let run = |seed| {
        let mut bits = seeded_source(seed);
        let mut found = Vec::new();
        random_search(4, Some(&mut bits), |sequence| {
            found.push(sequence);
            false
        })
        .unwrap();
        found
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn test_one_bit_per_internal_node() {
    for order in 1..=5 {
        let config = DeBruijnConfig::new(order).unwrap();
        let mut bits = CountingSource::seeded(order);
        let stats = TreeSearcher::new(config, |_| false).run_random(&mut bits);

        assert_eq!(bits.draws, stats.internal_nodes);
        // Branch order does not change which nodes exist
        let fixed = TreeSearcher::new(config, |_| false).run();
        assert_eq!(stats.internal_nodes, fixed.internal_nodes);
        assert_eq!(stats.leaves, fixed.leaves);
    }
}

#[test]
fn test_early_stop_draws_fewer_bits() {
    let config = DeBruijnConfig::new(5).unwrap();
    let mut bits = CountingSource::seeded(11);
    let stats = TreeSearcher::new(config, |_| true).run_random(&mut bits);

    assert!(stats.stopped);
    assert_eq!(stats.reported, 1);
    assert_eq!(bits.draws, stats.internal_nodes);
    // At least one root-to-leaf path
    assert!(bits.draws >= config.start_offset() as u64);
    let full = TreeSearcher::new(config, |_| false).run();
    assert!(bits.draws < full.internal_nodes);
}
