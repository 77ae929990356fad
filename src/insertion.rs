use crate::Sorter;

sort_impl!(InsertionSorter);

/// Insertion sort. Each element is moved left past all larger predecessors in a single rotation
/// once its slot is known, instead of being written at every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSorter;

impl<T: Ord> Sorter<T> for InsertionSorter {
    fn name(&self) -> &'static str {
        "Insertion"
    }

    fn sort(&self, v: &mut [T]) {
        let len = v.len();
        if len < 2 {
            return;
        }

        for i in 1..len {
            let mut j = i;
            while j > 0 && v[j - 1] > v[i] {
                j -= 1;
            }

            if j != i {
                v[j..=i].rotate_right(1);
            }
        }
    }
}
