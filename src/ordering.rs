/// Ordering policy of a [`Heap`](crate::heap::Heap), fixed for the lifetime of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Parents are less than or equal to their children, `take` yields the smallest value.
    Min,
    /// Parents are greater than or equal to their children, `take` yields the largest value.
    Max,
}

impl HeapOrder {
    /// Returns true if `a` has to sit closer to the root than `b`.
    #[inline]
    pub fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}
