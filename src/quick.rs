use crate::Sorter;

sort_impl!(QuickSorter);

/// Quicksort with a Lomuto partition around the last element.
///
/// No pivot selection and no recursion limit: already sorted or all-equal input degrades to
/// *O*(*n*^2) time and *O*(*n*) recursion depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSorter;

impl<T: Ord> Sorter<T> for QuickSorter {
    fn name(&self) -> &'static str {
        "Quick"
    }

    fn sort(&self, v: &mut [T]) {
        quicksort(v);
    }
}

fn quicksort<T: Ord>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let pivot_pos = partition(v);

    // The pivot is in its final position, exclude it from both sides.
    let (left, right) = v.split_at_mut(pivot_pos);
    quicksort(left);
    quicksort(&mut right[1..]);
}

/// Moves every element `<= pivot` left of a running boundary, with `pivot = v[v.len() - 1]`,
/// then swaps the pivot onto the boundary. Returns the final pivot position.
///
/// `v` must not be empty.
fn partition<T: Ord>(v: &mut [T]) -> usize {
    let high = v.len() - 1;

    let mut boundary = 0;
    for i in 0..high {
        if v[i] <= v[high] {
            v.swap(boundary, i);
            boundary += 1;
        }
    }

    v.swap(boundary, high);
    boundary
}
