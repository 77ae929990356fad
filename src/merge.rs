use crate::insertion::InsertionSorter;
use crate::managed_array::ManagedArray;
use crate::Sorter;

sort_impl!(with_insertion_fallback());

/// Partitions shorter than this are handed to the fallback sorter.
pub const SMALL_SORT_THRESHOLD: usize = 10;

/// Top-down merge sort that delegates short partitions to another sorter.
///
/// The fallback is borrowed, the caller keeps it alive for as long as the merge sorter is used.
pub struct MergeSorter<'a, T> {
    fallback: &'a dyn Sorter<T>,
}

impl<'a, T> MergeSorter<'a, T> {
    pub fn new(fallback: &'a dyn Sorter<T>) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &'a dyn Sorter<T> {
        self.fallback
    }
}

/// Merge sort falling back to insertion sort, the pairing the harness uses.
pub fn with_insertion_fallback<'a, T: Ord + 'a>() -> MergeSorter<'a, T> {
    MergeSorter::new(&InsertionSorter)
}

impl<T: Ord + Clone> Sorter<T> for MergeSorter<'_, T> {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort(&self, v: &mut [T]) {
        let len = v.len();
        if len < SMALL_SORT_THRESHOLD {
            trace!("Delegating {} elements to {}", len, self.fallback.name());
            self.fallback.sort(v);
            return;
        }

        let mid = len / 2;
        let mut left = scratch_copy(v, 0, mid - 1);
        let mut right = scratch_copy(v, mid, len - 1);

        self.sort(left.as_mut_slice());
        self.sort(right.as_mut_slice());

        merge(v, left.as_slice(), right.as_slice());
    }
}

fn scratch_copy<T: Clone>(v: &[T], start: usize, end: usize) -> ManagedArray<T> {
    match ManagedArray::slice_from(v, start, end) {
        Ok(arr) => arr,
        Err(err) => panic!("Merge sort could not copy a partition: {}", err),
    }
}

/// Merges the sorted runs `left` and `right` into `dest`, taking from `left` on ties.
fn merge<T: Ord + Clone>(dest: &mut [T], left: &[T], right: &[T]) {
    let (mut l, mut r) = (0, 0);

    for slot in dest.iter_mut() {
        let can_take_left = l < left.len();
        let can_take_right = r < right.len();

        if can_take_left && (!can_take_right || left[l] <= right[r]) {
            *slot = left[l].clone();
            l += 1;
        } else {
            *slot = right[r].clone();
            r += 1;
        }
    }
}
