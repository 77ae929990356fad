//! Shared correctness suite and input patterns for the sorters in `classic_sorts_rs`.

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Default;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
