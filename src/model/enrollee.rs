use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An applicant, as stored in a dataset file.
///
/// Enrollees are ordered and compared by `name` only: two enrollees with
/// the same name are equal even if the other fields differ.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Enrollee {
    pub name: String,
    pub faculty: String,
    pub speciality: String,
    pub score: u32,
}

#[allow(dead_code)]
impl Enrollee {
    pub fn new(name: &str, faculty: &str, speciality: &str, score: u32) -> Self {
        Self {
            name: name.to_owned(),
            faculty: faculty.to_owned(),
            speciality: speciality.to_owned(),
            score,
        }
    }

    /// Enrollee with only a name, for lookups.
    pub fn named(name: &str) -> Self {
        Self::new(name, "", "", 0)
    }
}

impl PartialEq for Enrollee {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Enrollee {}

impl PartialOrd for Enrollee {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Enrollee {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Enrollee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}/{}, {})",
            self.name, self.faculty, self.speciality, self.score
        )
    }
}

#[test]
fn test_operators_use_name_only() {
    let a = Enrollee::new("IVANOV", "MATH", "ALGEBRA", 250);
    let b = Enrollee::new("IVANOV", "PHYSICS", "OPTICS", 12);
    assert!(a == b);
    assert!(a <= b && a >= b);
    assert!(!(a < b) && !(a > b));
    let c = Enrollee::named("PETROV");
    assert!(a < c && c > a);
    assert!(a <= c && !(a >= c));
    assert!(a != c);
}

#[test]
fn test_display() {
    let e = Enrollee::new("IVANOV", "MATH", "ALGEBRA", 250);
    assert_eq!(e.to_string(), "IVANOV (MATH/ALGEBRA, 250)");
}
