use std::fmt;
use std::panic::Location;
#[cfg(feature="std")]
use std::error::Error;

/// Error value indicating an element access outside of `0..N`.
///
/// It carries the offending index, the array's bound and the source location
/// of the access. An array of length zero produces this error for every
/// access; see [`is_empty_access`](OutOfRangeError::is_empty_access).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    index: usize,
    bound: usize,
    location: &'static Location<'static>,
}

impl OutOfRangeError {
    #[track_caller]
    pub(crate) fn new(index: usize, bound: usize) -> Self {
        OutOfRangeError {
            index,
            bound,
            location: Location::caller(),
        }
    }

    /// The index that was requested.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the array that was accessed.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Where the failing access was made.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Return `true` if the access was made on an array of length zero.
    pub fn is_empty_access(&self) -> bool {
        self.bound == 0
    }

    fn description(&self) -> &'static str {
        if self.is_empty_access() {
            "attempt to access element of an empty array"
        } else {
            "index out of range"
        }
    }
}

#[cfg(feature="std")]
/// Requires `features="std"`.
impl Error for OutOfRangeError {}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty_access() {
            write!(f, "fixedarray: {} at {}", self.description(), self.location)
        } else {
            write!(f, "fixedarray: index {} out of range for length {} at {}",
                   self.index, self.bound, self.location)
        }
    }
}

impl fmt::Debug for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OutOfRangeError: {}", self)
    }
}
