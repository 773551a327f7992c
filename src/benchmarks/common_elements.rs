use easybench::{BenchError, Candidate, ComparisonReport};
use std::collections::HashSet;

use super::random_values;

/// Nested scan of the second slice against the first. Keeps the second
/// slice's order and duplicates.
pub fn common_elements_naive(a: &[u32], b: &[u32]) -> Vec<u32> {
    b.iter().copied().filter(|x| a.contains(x)).collect()
}

/// Set of the first slice, then a single filtering pass over the second.
pub fn common_elements_hashed(a: &[u32], b: &[u32]) -> Vec<u32> {
    let first: HashSet<u32> = a.iter().copied().collect();
    b.iter().copied().filter(|x| first.contains(x)).collect()
}

pub fn common_elements(iterations: u32) -> Result<ComparisonReport, BenchError> {
    let args = (random_values(1000), random_values(1000));
    let candidates = vec![
        Candidate::new("common_elements_naive", |(a, b): &(Vec<u32>, Vec<u32>)| {
            common_elements_naive(a, b)
        }),
        Candidate::new("common_elements_hashed", |(a, b): &(Vec<u32>, Vec<u32>)| {
            common_elements_hashed(a, b)
        }),
    ];
    easybench::compare("common elements", &candidates, &args, iterations)
}
