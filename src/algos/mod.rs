pub use self::search::{binary_search, linear_search};
pub use self::sort::merge_sort;

mod search;
mod sort;
