use std::fmt;
use std::ops::Index;

/// Ordered list of array dimensions, slowest-varying axis first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dims(Vec<usize>);

impl Dims {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self(dims.into())
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Number of elements described by these dimensions.
    pub fn size(&self) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        self.0.iter().product()
    }

    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn get(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }
}

impl Index<usize> for Dims {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

impl From<Vec<usize>> for Dims {
    fn from(value: Vec<usize>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[usize; N]> for Dims {
    fn from(value: [usize; N]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}
