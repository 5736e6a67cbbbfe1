use std::fmt::{self, Display, Formatter};

/// Two values of arbitrary types, along with a flag recording whether they were ever assigned.
///
/// A default Pair holds default values and is unassigned, which makes it usable as an empty slot
/// in an array. The flag is never updated implicitly by mutable access, handling it is entirely up
/// to the user (see [`set_assigned`](Pair::set_assigned) and [`assign`](Pair::assign)).
///
/// # Examples
/// ```
/// # use basic_structures::collections::pair::Pair;
/// let mut slots: [Pair<&str, u32>; 4] = Default::default();
/// assert!(!slots[2].is_assigned());
///
/// slots[2].assign("key", 7);
/// assert!(slots[2].is_assigned());
/// assert_eq!(slots[2].second(), &7);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
    assigned: bool,
}

impl<A, B> Pair<A, B> {
    /// Creates a new assigned Pair holding `first` and `second`.
    pub const fn new(first: A, second: B) -> Pair<A, B> {
        Pair {
            first,
            second,
            assigned: true,
        }
    }

    pub const fn first(&self) -> &A {
        &self.first
    }

    pub const fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    pub const fn second(&self) -> &B {
        &self.second
    }

    pub const fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    /// Returns true if the Pair was created with [`Pair::new`], or flagged as assigned since.
    pub const fn is_assigned(&self) -> bool {
        self.assigned
    }

    pub const fn set_assigned(&mut self, assigned: bool) {
        self.assigned = assigned;
    }

    /// Replaces both values and marks the Pair as assigned. The old values are dropped.
    pub fn assign(&mut self, first: A, second: B) {
        self.first = first;
        self.second = second;
        self.assigned = true;
    }

    /// Consumes the Pair, returning both of its values as a tuple.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
