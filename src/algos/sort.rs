use crate::model::Comparator;

/// Sort `data` in ascending order according to `cmp` using a top-down
/// merge sort. The sort is stable: elements comparing equal keep their
/// relative order.
///
/// A single auxiliary buffer of `data.len()` elements is shared by every
/// merge and released when the sort returns.
pub fn merge_sort<T: Clone, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    let mut buffer = Vec::with_capacity(data.len());
    sort_range(data, &mut buffer, cmp);
}

fn sort_range<T: Clone, C: Comparator<T>>(data: &mut [T], buffer: &mut Vec<T>, cmp: &C) {
    if data.len() <= 1 {
        return;
    }
    // The left half gets the extra element of odd-sized ranges.
    let mid = data.len().div_ceil(2);
    sort_range(&mut data[..mid], buffer, cmp);
    sort_range(&mut data[mid..], buffer, cmp);
    merge(data, mid, buffer, cmp);
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]`.
fn merge<T: Clone, C: Comparator<T>>(data: &mut [T], mid: usize, buffer: &mut Vec<T>, cmp: &C) {
    buffer.clear();
    let (left, right) = data.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if cmp.lt(&right[j], &left[i]) {
            buffer.push(right[j].clone());
            j += 1;
        } else {
            buffer.push(left[i].clone());
            i += 1;
        }
    }
    buffer.extend_from_slice(&left[i..]);
    buffer.extend_from_slice(&right[j..]);
    data.clone_from_slice(&buffer[..]);
}
