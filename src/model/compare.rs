use super::Enrollee;
use std::cmp::Ordering;

/// Ordering capability handed to the generic sort and search routines.
///
/// Only `compare` has to be provided. The relational helpers derive from
/// it, so `le` and `ge` hold on equality while `lt` and `gt` do not.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    fn ge(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }
}

/// Compare enrollees by name, ignoring every other field.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByName;

impl Comparator<Enrollee> for ByName {
    fn compare(&self, a: &Enrollee, b: &Enrollee) -> Ordering {
        a.name.cmp(&b.name)
    }
}

/// Compare values by their own total order.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
