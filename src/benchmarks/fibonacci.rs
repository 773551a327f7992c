use easybench::{BenchError, Candidate, ComparisonReport};
use std::collections::HashMap;

/// Exponential recursion, the classic worst case.
pub fn fib_naive(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fib_naive(n - 1) + fib_naive(n - 2)
}

/// Memoization table with an explicit lifecycle: create it, reuse it across
/// calls if warm-cache timing is wanted, or `reset` it deliberately.
#[derive(Debug, Default)]
pub struct FibCache {
    memo: HashMap<u32, u64>,
}

impl FibCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fib(&mut self, n: u32) -> u64 {
        if n <= 1 {
            return u64::from(n);
        }
        if let Some(&value) = self.memo.get(&n) {
            return value;
        }
        let value = self.fib(n - 1) + self.fib(n - 2);
        self.memo.insert(n, value);
        value
    }

    pub fn reset(&mut self) {
        self.memo.clear();
    }
}

const FIB_INPUT: u32 = 25;

pub fn fibonacci(iterations: u32) -> Result<ComparisonReport, BenchError> {
    let candidates = vec![
        Candidate::new("fib_naive", |n: &u32| fib_naive(*n)),
        // A fresh cache per call keeps every iteration doing the same work.
        Candidate::new("fib_memoized", |n: &u32| FibCache::new().fib(*n)),
    ];
    easybench::compare("fibonacci", &candidates, &FIB_INPUT, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_base_cases() {
        assert_eq!(fib_naive(0), 0);
        assert_eq!(fib_naive(1), 1);
        assert_eq!(fib_naive(10), 55);
    }

    #[test]
    fn memoized_matches_naive() {
        let mut cache = FibCache::new();
        for n in 0..=20 {
            assert_eq!(cache.fib(n), fib_naive(n));
        }
    }

    #[test]
    fn cache_handles_inputs_naive_cannot() {
        let mut cache = FibCache::new();
        assert_eq!(cache.fib(50), 12_586_269_025);
    }

    #[test]
    fn reset_clears_the_table() {
        let mut cache = FibCache::new();
        cache.fib(30);
        cache.reset();
        assert_eq!(cache.fib(12), 144);
    }
}
