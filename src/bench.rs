use crate::algos::{binary_search, linear_search, merge_sort};
use crate::checks;
use crate::model::{ByName, Enrollee};
use crate::multimap::MultiMap;
use eyre::{Report, ensure};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Time spent in every benchmarked phase for one dataset.
#[derive(Clone, Debug)]
pub struct Timings {
    pub size: usize,
    pub linear_search: Duration,
    pub merge_sort: Duration,
    pub binary_search: Duration,
    pub multimap_search: Duration,
}

impl Timings {
    /// Sorting then searching, as a whole.
    pub fn binary_search_with_sorting(&self) -> Duration {
        self.merge_sort + self.binary_search
    }
}

/// What every strategy found for the target.
#[derive(Debug)]
pub struct Matches {
    pub linear: Vec<usize>,
    pub binary: Vec<usize>,
    pub multimap: usize,
}

/// Run every strategy on `enrollees`, looking for an enrollee picked at
/// random among them.
#[instrument(skip_all, fields(size = enrollees.len()))]
pub fn run<R: Rng + ?Sized>(mut enrollees: Vec<Enrollee>, rng: &mut R) -> Result<Timings, Report> {
    let size = enrollees.len();
    ensure!(size > 0, "cannot benchmark an empty dataset");
    let multimap = enrollees
        .iter()
        .map(|e| (e.name.clone(), e.clone()))
        .collect::<MultiMap<_, _>>();
    let target = enrollees[rng.random_range(0..size)].clone();
    debug!(target = %target, "Target chosen");

    let begin = Instant::now();
    let linear = linear_search(&enrollees, &target, &ByName);
    let linear_elapsed = begin.elapsed();

    let sort_begin = Instant::now();
    merge_sort(&mut enrollees, &ByName);
    let search_begin = Instant::now();
    let binary = binary_search(&enrollees, &target, &ByName);
    let end = Instant::now();

    let begin = Instant::now();
    let found = multimap.find(target.name.as_str()).len();
    let multimap_elapsed = begin.elapsed();

    let matches = Matches {
        linear,
        binary,
        multimap: found,
    };
    debug!(
        linear = %matches.linear.len(),
        binary = %matches.binary.len(),
        multimap = %matches.multimap,
        "Matches found"
    );
    checks::ensure_sorted(&enrollees)?;
    checks::ensure_consistent(&enrollees, &target, &matches)?;

    let timings = Timings {
        size,
        linear_search: linear_elapsed,
        merge_sort: search_begin - sort_begin,
        binary_search: end - search_begin,
        multimap_search: multimap_elapsed,
    };
    info!(
        linear_search = ?timings.linear_search,
        merge_sort = ?timings.merge_sort,
        binary_search = ?timings.binary_search,
        multimap_search = ?timings.multimap_search,
        "Dataset benchmarked"
    );
    Ok(timings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_run() {
        let enrollees = ["C", "A", "B", "A", "D", "A"]
            .iter()
            .enumerate()
            .map(|(i, n)| Enrollee::new(n, "F", "S", i as u32))
            .collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(3);
        let timings = run(enrollees, &mut rng).unwrap();
        assert_eq!(timings.size, 6);
        assert_eq!(
            timings.binary_search_with_sorting(),
            timings.merge_sort + timings.binary_search
        );
    }

    #[test]
    fn test_run_every_target() {
        let enrollees = ["X", "Y", "X", "Z"]
            .iter()
            .map(|n| Enrollee::named(n))
            .collect::<Vec<_>>();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(run(enrollees.clone(), &mut rng).is_ok());
        }
    }

    #[test]
    fn test_run_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(run(Vec::new(), &mut rng).is_err());
    }
}
