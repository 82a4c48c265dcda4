use crate::bench::Timings;
use std::time::Duration;

fn line(operation: &str, size: usize, elapsed: Duration) -> String {
    format!(
        "{} {} elements {} mcs\n",
        operation,
        size,
        elapsed.as_micros()
    )
}

/// Report for one dataset, ending with an empty line.
pub fn format_timings(t: &Timings) -> String {
    let mut out = String::new();
    out.push_str(&line("Linear search", t.size, t.linear_search));
    out.push_str(&line("Merge sort", t.size, t.merge_sort));
    out.push_str(&line("Binary search", t.size, t.binary_search));
    out.push_str(&line(
        "Binary search with sorting",
        t.size,
        t.binary_search_with_sorting(),
    ));
    out.push_str(&line("Multimap search", t.size, t.multimap_search));
    out.push('\n');
    out
}

pub fn display_timings(t: &Timings) {
    print!("{}", format_timings(t));
}

#[test]
fn test_format_timings() {
    let t = Timings {
        size: 100,
        linear_search: Duration::from_micros(12),
        merge_sort: Duration::from_micros(340),
        binary_search: Duration::from_nanos(1500),
        multimap_search: Duration::ZERO,
    };
    assert_eq!(
        format_timings(&t),
        "Linear search 100 elements 12 mcs\n\
         Merge sort 100 elements 340 mcs\n\
         Binary search 100 elements 1 mcs\n\
         Binary search with sorting 100 elements 341 mcs\n\
         Multimap search 100 elements 0 mcs\n\n"
    );
}
