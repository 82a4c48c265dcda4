use crate::bench::Matches;
use crate::model::{ByName, Comparator, Enrollee};
use eyre::{Report, bail, ensure};

pub fn ensure_sorted(enrollees: &[Enrollee]) -> Result<(), Report> {
    if let Some(pos) = enrollees
        .windows(2)
        .position(|w| ByName.gt(&w[0], &w[1]))
    {
        bail!(
            "enrollees are not sorted at position {}: {} > {}",
            pos,
            enrollees[pos].name,
            enrollees[pos + 1].name
        );
    }
    Ok(())
}

/// Check that every strategy found the same enrollees, `sorted` being the
/// data the binary search ran on.
pub fn ensure_consistent(
    sorted: &[Enrollee],
    target: &Enrollee,
    matches: &Matches,
) -> Result<(), Report> {
    ensure!(
        !matches.linear.is_empty(),
        "linear search did not find {}",
        target.name
    );
    ensure!(
        matches.linear.len() == matches.binary.len() && matches.linear.len() == matches.multimap,
        "inconsistent number of matches for {}: linear {}, binary {}, multimap {}",
        target.name,
        matches.linear.len(),
        matches.binary.len(),
        matches.multimap
    );
    ensure!(
        matches.binary.windows(2).all(|w| w[1] == w[0] + 1),
        "binary search matches for {} are not contiguous",
        target.name
    );
    ensure!(
        matches.binary.iter().all(|&i| ByName.eq(&sorted[i], target)),
        "binary search returned enrollees not named {}",
        target.name
    );
    Ok(())
}
