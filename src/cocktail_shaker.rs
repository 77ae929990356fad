use crate::bubble::{ltr_pass, rtl_pass};
use crate::Sorter;

sort_impl!(CocktailShakerSorter);

/// Alternates left-to-right and right-to-left passes, starting left-to-right.
///
/// The direction flips after every pass, the sort ends with the first pass that swaps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CocktailShakerSorter;

impl<T: Ord> Sorter<T> for CocktailShakerSorter {
    fn name(&self) -> &'static str {
        "Cocktail Shaker"
    }

    fn sort(&self, v: &mut [T]) {
        if v.len() < 2 {
            return;
        }

        let passes: [fn(&mut [T]) -> bool; 2] = [ltr_pass, rtl_pass];
        let mut direction = 0;
        while passes[direction](v) {
            direction ^= 1;
        }
    }
}
