mod common_elements;
mod duplicates;
mod festival;
mod fibonacci;

// Re-export suite entry points directly.
pub use common_elements::common_elements;
pub use duplicates::duplicates;
pub use festival::{festival_search, festival_stages};
pub use fibonacci::fibonacci;

use easybench::{BenchError, ComparisonReport};
use rand::Rng;

pub type SuiteFn = fn(u32) -> Result<ComparisonReport, BenchError>;

/// Every runnable suite, keyed by CLI name.
pub const SUITES: &[(&str, SuiteFn)] = &[
    ("duplicates", duplicates),
    ("common-elements", common_elements),
    ("fibonacci", fibonacci),
    ("festival-search", festival_search),
    ("festival-stages", festival_stages),
];

/// Random values in `0..1000`, the input shape the array suites share.
pub(crate) fn random_values(count: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..1000)).collect()
}
