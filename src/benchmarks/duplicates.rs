use easybench::{BenchError, Candidate, ComparisonReport};
use std::collections::HashSet;

use super::random_values;

/// Quadratic scan: every element against every later element.
pub fn contains_duplicate_naive(values: &[u32]) -> bool {
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            if a == b {
                return true;
            }
        }
    }
    false
}

/// Single pass over a seen-set.
pub fn contains_duplicate_hashed(values: &[u32]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(value) {
            return true;
        }
    }
    false
}

pub fn duplicates(iterations: u32) -> Result<ComparisonReport, BenchError> {
    let values = random_values(1000);
    let candidates = vec![
        Candidate::new("contains_duplicate_naive", |v: &Vec<u32>| {
            contains_duplicate_naive(v)
        }),
        Candidate::new("contains_duplicate_hashed", |v: &Vec<u32>| {
            contains_duplicate_hashed(v)
        }),
    ];
    easybench::compare("duplicate detection", &candidates, &values, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_a_duplicate() {
        let values = [1, 5, 9, 5, 3];
        assert!(contains_duplicate_naive(&values));
        assert!(contains_duplicate_hashed(&values));
    }

    #[test]
    fn clean_input_has_no_duplicate() {
        let values = [4, 8, 15, 16, 23, 42];
        assert!(!contains_duplicate_naive(&values));
        assert!(!contains_duplicate_hashed(&values));
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(!contains_duplicate_naive(&[]));
        assert!(!contains_duplicate_hashed(&[]));
        assert!(!contains_duplicate_naive(&[7]));
        assert!(!contains_duplicate_hashed(&[7]));
    }
}
