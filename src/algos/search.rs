use crate::model::Comparator;

/// Return the indices of every element equal to `target`, in ascending
/// order. The whole slice is always scanned.
pub fn linear_search<T, C: Comparator<T>>(data: &[T], target: &T, cmp: &C) -> Vec<usize> {
    data.iter()
        .enumerate()
        .filter_map(|(i, e)| if cmp.eq(e, target) { Some(i) } else { None })
        .collect()
}

/// Return the indices of every element equal to `target` in a slice sorted
/// in ascending order according to `cmp`. Matching elements are contiguous
/// in a sorted slice, so the result is a run of consecutive indices.
///
/// The result is unspecified (but the call is memory safe) if `data` is not
/// sorted.
pub fn binary_search<T, C: Comparator<T>>(data: &[T], target: &T, cmp: &C) -> Vec<usize> {
    // Search window is [left, right).
    let (mut left, mut right) = (0, data.len());
    let hit = loop {
        if left >= right {
            return Vec::new();
        }
        let mid = left + (right - left) / 2;
        if cmp.eq(&data[mid], target) {
            break mid;
        }
        if cmp.gt(&data[mid], target) {
            right = mid;
        } else {
            left = mid + 1;
        }
    };
    let mut first = hit;
    while first > 0 && cmp.eq(&data[first - 1], target) {
        first -= 1;
    }
    let mut last = hit + 1;
    while last < data.len() && cmp.eq(&data[last], target) {
        last += 1;
    }
    (first..last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::merge_sort;
    use crate::model::{ByName, Enrollee, Natural};
    use proptest::prelude::*;

    fn enrollees(names: &[&str]) -> Vec<Enrollee> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Enrollee::new(n, "FACULTY", "SPECIALITY", i as u32))
            .collect()
    }

    #[test]
    fn test_empty() {
        let data: Vec<Enrollee> = Vec::new();
        let target = Enrollee::named("A");
        assert!(linear_search(&data, &target, &ByName).is_empty());
        assert!(binary_search(&data, &target, &ByName).is_empty());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(binary_search(&[7], &7, &Natural), vec![0]);
        assert!(binary_search(&[7], &3, &Natural).is_empty());
        assert!(binary_search(&[7], &9, &Natural).is_empty());
    }

    #[test]
    fn test_linear_search_unsorted() {
        let data = enrollees(&["B", "A", "C"]);
        assert_eq!(linear_search(&data, &Enrollee::named("B"), &ByName), vec![0]);
        assert!(linear_search(&data, &Enrollee::named("D"), &ByName).is_empty());
    }

    #[test]
    fn test_sort_then_binary_search() {
        let mut data = enrollees(&["B", "A", "C"]);
        merge_sort(&mut data, &ByName);
        let names = data.iter().map(|e| e.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(binary_search(&data, &Enrollee::named("B"), &ByName), vec![1]);
    }

    #[test]
    fn test_duplicates() {
        let mut data = enrollees(&["M", "Q", "X", "A", "Z", "X", "C", "X", "B"]);
        let target = Enrollee::named("X");
        assert_eq!(linear_search(&data, &target, &ByName), vec![2, 5, 7]);
        merge_sort(&mut data, &ByName);
        assert_eq!(binary_search(&data, &target, &ByName), vec![5, 6, 7]);
    }

    #[test]
    fn test_matches_other_fields_are_ignored() {
        let data = vec![
            Enrollee::new("A", "F1", "S1", 1),
            Enrollee::new("A", "F2", "S2", 2),
        ];
        let target = Enrollee::new("A", "OTHER", "OTHER", 300);
        assert_eq!(linear_search(&data, &target, &ByName), vec![0, 1]);
        assert_eq!(binary_search(&data, &target, &ByName), vec![0, 1]);
    }

    #[test]
    fn test_runs_at_boundaries() {
        let data = [1, 1, 1, 2, 3, 4, 4];
        assert_eq!(binary_search(&data, &1, &Natural), vec![0, 1, 2]);
        assert_eq!(binary_search(&data, &4, &Natural), vec![5, 6]);
        assert!(binary_search(&data, &0, &Natural).is_empty());
        assert!(binary_search(&data, &5, &Natural).is_empty());
        let all = [9; 5];
        assert_eq!(binary_search(&all, &9, &Natural), vec![0, 1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_linear_search_finds_exact_indices(data in prop::collection::vec(0u8..8, 0..64), target in 0u8..8) {
            let expected = (0..data.len()).filter(|&i| data[i] == target).collect::<Vec<_>>();
            prop_assert_eq!(linear_search(&data, &target, &Natural), expected);
        }

        #[test]
        fn prop_binary_search_agrees_with_linear_search(mut data in prop::collection::vec(0u8..8, 0..64), target in 0u8..8) {
            data.sort();
            let found = binary_search(&data, &target, &Natural);
            prop_assert_eq!(&found, &linear_search(&data, &target, &Natural));
            prop_assert!(found.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }
}
