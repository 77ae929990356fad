//! Classic in-place comparison sorts behind one [`Sorter`] trait, plus the array-backed binary
//! heap that drives heap sort and the small benchmark harness that exercises all of them.

#[macro_use]
extern crate log;

use std::collections::TryReserveError;
use std::io;

use quick_error::quick_error;

/// Common contract of all sorting strategies.
///
/// `sort` leaves `v` in non-descending order and as a permutation of its original contents.
/// Slices of length 0 and 1 are left untouched. None of the implementations are stable.
pub trait Sorter<T> {
    /// Fixed, human readable label.
    fn name(&self) -> &'static str;

    fn sort(&self, v: &mut [T]);
}

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Allocation(e: TryReserveError) {
            display("Unable to allocate storage: {}", e)
            from()
        }
        CapacityExceeded { requested: usize, capacity: usize } {
            display("Number of elements from source ({}) exceeds ManagedArray size of {}", requested, capacity)
        }
        HeapFull { capacity: usize } {
            display("Heap is full, capacity {}", capacity)
        }
        Io(e: io::Error) {
            display("I/O error {}", e)
            from()
        }
    }
}

/// Exposes the sorter produced by `$sorter` as `SortImpl`, so that the shared suite in
/// `sort_test_tools` can be instantiated for every algorithm module.
macro_rules! sort_impl {
    ($sorter:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                crate::Sorter::<i32>::name(&$sorter).into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone + Default,
            {
                crate::Sorter::<T>::sort(&$sorter, arr);
            }
        }
    };
}

pub mod bubble;
pub mod cocktail_shaker;
pub mod harness;
pub mod heap;
pub mod insertion;
pub mod managed_array;
pub mod merge;
pub mod ordering;
pub mod quick;
pub mod selection;
pub mod stopwatch;
