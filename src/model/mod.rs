pub use self::compare::{ByName, Comparator, Natural};
pub use self::enrollee::Enrollee;

mod compare;
mod enrollee;
