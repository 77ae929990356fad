//! Array-backed binary heap and the heap sort built on top of it.
//!
//! The heap is an implicit complete binary tree stored 1-indexed, slot 0 is never used. The node
//! at index `i` has its children at `2i` and `2i + 1` and its parent at `i / 2`, so all navigation
//! is index arithmetic. Navigation that leaves `[1, len]` yields `None`, and sifting stops there.

use crate::managed_array::ManagedArray;
use crate::ordering::HeapOrder;
use crate::{Error, Sorter};

sort_impl!(HeapSorter);

const ROOT_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftDirection {
    Up,
    Down,
}

/// Position of an occupied slot in a [`Heap`].
///
/// Only obtainable through the heap's navigation functions, which return `None` for positions
/// outside `[1, len]`. A node is only meaningful until the next `store` or `take`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapNode {
    index: usize,
}

impl HeapNode {
    pub fn index(self) -> usize {
        self.index
    }
}

/// Fixed capacity binary heap with an ordering policy chosen at construction.
///
/// Slots in `[1, len]` are always `Some`, every other slot is `None`.
#[derive(Debug)]
pub struct Heap<T> {
    len: usize,
    order: HeapOrder,
    storage: ManagedArray<Option<T>>,
}

impl<T: Ord> Heap<T> {
    pub fn new(capacity: usize, order: HeapOrder) -> Result<Self, Error> {
        trace!("Allocating {:?} heap with capacity {}", order, capacity);

        Ok(Self {
            len: 0,
            order,
            storage: ManagedArray::new(capacity.saturating_add(1))?,
        })
    }

    pub fn min(capacity: usize) -> Result<Self, Error> {
        Self::new(capacity, HeapOrder::Min)
    }

    pub fn max(capacity: usize) -> Result<Self, Error> {
        Self::new(capacity, HeapOrder::Max)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Inserts `value`, failing with [`Error::HeapFull`] once `len == capacity`.
    pub fn store(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            return Err(Error::HeapFull {
                capacity: self.capacity(),
            });
        }

        self.len += 1;
        self.storage[self.len] = Some(value);

        if self.len != ROOT_INDEX {
            if let Some(added) = self.node(self.len) {
                self.heapify_up(added);
            }
        }

        Ok(())
    }

    /// Removes and returns the root value, `None` if the heap is empty.
    pub fn take(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.storage.as_mut_slice().swap(ROOT_INDEX, self.len);
        let taken = self.storage[self.len].take();
        self.len -= 1;

        if self.len > 1 {
            if let Some(root) = self.root() {
                self.heapify_down(root);
            }
        }

        taken
    }

    pub fn peek(&self) -> Option<&T> {
        self.root().map(|root| self.value(root))
    }

    pub fn root(&self) -> Option<HeapNode> {
        self.node(ROOT_INDEX)
    }

    pub fn left(&self, node: HeapNode) -> Option<HeapNode> {
        self.node(2 * node.index)
    }

    pub fn right(&self, node: HeapNode) -> Option<HeapNode> {
        self.node(2 * node.index + 1)
    }

    pub fn parent(&self, node: HeapNode) -> Option<HeapNode> {
        if node.index == ROOT_INDEX {
            return None;
        }

        self.node(node.index / 2)
    }

    pub fn value(&self, node: HeapNode) -> &T {
        match &self.storage[node.index] {
            Some(value) => value,
            None => unreachable!("Occupied heap slot {} holds no value", node.index),
        }
    }

    /// Checks that every parent in `[1, len]` dominates its children under the heap's order.
    pub fn satisfies_heap_property(&self) -> bool {
        (ROOT_INDEX + 1..=self.len).all(|i| {
            let (child, parent) = (&self.storage[i], &self.storage[i / 2]);
            match (child, parent) {
                (Some(child), Some(parent)) => !self.order.precedes(child, parent),
                _ => false,
            }
        })
    }

    fn node(&self, index: usize) -> Option<HeapNode> {
        if index < ROOT_INDEX || index > self.len {
            return None;
        }

        Some(HeapNode { index })
    }

    fn heapify_up(&mut self, node: HeapNode) {
        let mut current = Some(node);
        while let Some(node) = current {
            let parent = self.parent(node);
            current = self.try_swap_value(node, parent, SiftDirection::Up);
        }
    }

    fn heapify_down(&mut self, node: HeapNode) {
        let mut current = Some(node);
        while let Some(node) = current {
            let child = self.preferred_child(node);
            current = self.try_swap_value(node, child, SiftDirection::Down);
        }
    }

    /// The child that should end up closer to the root, the left one on ties.
    fn preferred_child(&self, node: HeapNode) -> Option<HeapNode> {
        match (self.left(node), self.right(node)) {
            (Some(left), Some(right)) => {
                if self.order.precedes(self.value(right), self.value(left)) {
                    Some(right)
                } else {
                    Some(left)
                }
            }
            (left, None) => left,
            (None, right) => right,
        }
    }

    /// Swaps the values of `node` and `other` if they violate the heap property for the given
    /// direction and returns the position the sifted value moved to.
    fn try_swap_value(
        &mut self,
        node: HeapNode,
        other: Option<HeapNode>,
        direction: SiftDirection,
    ) -> Option<HeapNode> {
        let other = other?;

        let (val, other_val) = (self.value(node), self.value(other));
        let should_swap = match direction {
            SiftDirection::Down => self.order.precedes(other_val, val),
            SiftDirection::Up => self.order.precedes(val, other_val),
        };

        if !should_swap {
            return None;
        }

        self.storage.as_mut_slice().swap(node.index, other.index);
        Some(other)
    }
}

/// Heap sort driven by [`Heap`].
///
/// Every element is stored in a min-heap as a `(&T, position)` pair, one by one. Draining the heap
/// yields the positions in sorted order, and that permutation is then applied to `v` in place by
/// swaps, so elements never have to be moved out of the slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSorter;

impl<T: Ord> Sorter<T> for HeapSorter {
    fn name(&self) -> &'static str {
        "Heap"
    }

    fn sort(&self, v: &mut [T]) {
        let len = v.len();
        if len < 2 {
            return;
        }

        let sorted_positions = drain_positions(v);
        apply_permutation(v, &sorted_positions);
    }
}

/// Positions of `v` in ascending order of their values.
fn drain_positions<T: Ord>(v: &[T]) -> Vec<usize> {
    let mut heap = match Heap::min(v.len()) {
        Ok(heap) => heap,
        Err(err) => panic!("Heap sort could not allocate its heap: {}", err),
    };

    for entry in v.iter().enumerate().map(|(pos, elem)| (elem, pos)) {
        if let Err(err) = heap.store(entry) {
            panic!("Heap sort overflowed a heap sized for the input: {}", err);
        }
    }

    let mut positions = Vec::with_capacity(v.len());
    while let Some((_, pos)) = heap.take() {
        positions.push(pos);
    }

    assert_eq!(
        positions.len(),
        v.len(),
        "Heap drained before every element was placed"
    );
    positions
}

/// Rearranges `v` so that `v[i]` ends up holding the element previously at `order[i]`.
///
/// Positions below `i` are final, so an element they held has been swapped further along its
/// cycle. Following `order` until it leaves that prefix finds its current slot.
fn apply_permutation<T>(v: &mut [T], order: &[usize]) {
    for i in 0..v.len() {
        let mut src = order[i];
        while src < i {
            src = order[src];
        }

        v.swap(i, src);
    }
}
