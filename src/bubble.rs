use crate::Sorter;

sort_impl!(BubbleSorter);

/// Repeats left-to-right adjacent swap passes until a pass swaps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSorter;

impl<T: Ord> Sorter<T> for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble"
    }

    fn sort(&self, v: &mut [T]) {
        if v.len() < 2 {
            return;
        }

        while ltr_pass(v) {}
    }
}

/// Returns true if any values were swapped.
pub(crate) fn ltr_pass<T: Ord>(v: &mut [T]) -> bool {
    let mut swapped = false;
    for i in 1..v.len() {
        if v[i - 1] > v[i] {
            v.swap(i - 1, i);
            swapped = true;
        }
    }
    swapped
}

pub(crate) fn rtl_pass<T: Ord>(v: &mut [T]) -> bool {
    let mut swapped = false;
    for i in (1..v.len()).rev() {
        if v[i] < v[i - 1] {
            v.swap(i - 1, i);
            swapped = true;
        }
    }
    swapped
}
