use crate::Sorter;

sort_impl!(SelectionSorter);

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSorter;

impl<T: Ord> Sorter<T> for SelectionSorter {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn sort(&self, v: &mut [T]) {
        let len = v.len();
        if len < 2 {
            return;
        }

        for i in 0..(len - 1) {
            let mut min_idx = i;
            for j in (i + 1)..len {
                if v[min_idx] > v[j] {
                    min_idx = j;
                }
            }

            if i != min_idx {
                v.swap(i, min_idx);
            }
        }
    }
}
