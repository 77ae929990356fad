use std::mem::size_of;
use std::ops::{Index, IndexMut};

use crate::Error;

/// Fixed-length, exclusively owned buffer.
///
/// Indexing is bounds checked and panics on out-of-range access. Copying more elements into the
/// buffer than it can hold is reported as [`Error::CapacityExceeded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedArray<T> {
    data: Box<[T]>,
}

impl<T> ManagedArray<T> {
    /// Allocates `len` default initialized elements.
    pub fn new(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize_with(len, T::default);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Copies `src[start..=end]` into a new buffer. Note that `end` is inclusive.
    pub fn slice_from(src: &[T], start: usize, end: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        let src = &src[start..=end];

        let mut data = Vec::new();
        data.try_reserve_exact(src.len())?;
        data.extend_from_slice(src);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn num_bytes(&self) -> usize {
        size_of::<T>() * self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Mutable view of the first `len` elements.
    pub fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        &mut self.data[..len]
    }

    /// Copies all of `src` to the front of the buffer, leaving the rest as is.
    pub fn copy_from(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.data.len() {
            return Err(Error::CapacityExceeded {
                requested: src.len(),
                capacity: self.data.len(),
            });
        }

        self.data[..src.len()].clone_from_slice(src);
        Ok(())
    }

    pub fn copy_from_array(&mut self, src: &ManagedArray<T>) -> Result<(), Error>
    where
        T: Clone,
    {
        self.copy_from(src.as_slice())
    }
}

impl<T> Index<usize> for ManagedArray<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for ManagedArray<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}
