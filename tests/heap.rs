//! Binary heap engine tests: concrete scenarios, node navigation and property-based invariants.

use std::cmp::Ordering;

use proptest::prelude::*;

use classic_sorts_rs::heap::{Heap, HeapSorter};
use classic_sorts_rs::ordering::HeapOrder;
use classic_sorts_rs::{Error, Sorter};

fn drain<T: Ord>(heap: &mut Heap<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(val) = heap.take() {
        out.push(val);
    }
    out
}

#[test]
fn min_heap_yields_ascending() {
    let mut heap = Heap::min(5).unwrap();
    for val in [5, 3, 8, 1, 9] {
        heap.store(val).unwrap();
    }

    assert_eq!(heap.take(), Some(1));
    assert_eq!(heap.take(), Some(3));
    assert_eq!(heap.take(), Some(5));
    assert_eq!(heap.take(), Some(8));
    assert_eq!(heap.take(), Some(9));
    assert_eq!(heap.take(), None);
}

#[test]
fn max_heap_yields_descending() {
    let mut heap = Heap::max(5).unwrap();
    for val in [5, 3, 8, 1, 9] {
        heap.store(val).unwrap();
    }

    assert_eq!(heap.order(), HeapOrder::Max);
    assert_eq!(drain(&mut heap), vec![9, 8, 5, 3, 1]);
}

#[test]
fn take_on_empty_heap() {
    let mut heap = Heap::<i32>::min(4).unwrap();

    assert_eq!(heap.take(), None);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), 4);
}

#[test]
fn peek_does_not_remove() {
    let mut heap = Heap::min(3).unwrap();
    heap.store(7).unwrap();
    heap.store(2).unwrap();

    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.len(), 2);
}

#[test]
fn store_past_capacity_fails() {
    let mut heap = Heap::min(2).unwrap();
    heap.store(1).unwrap();
    heap.store(2).unwrap();

    let err = heap.store(3).unwrap_err();
    assert!(matches!(err, Error::HeapFull { capacity: 2 }));
    assert_eq!(heap.len(), 2);
    assert_eq!(drain(&mut heap), vec![1, 2]);
}

#[test]
fn zero_capacity_heap() {
    let mut heap = Heap::<u8>::max(0).unwrap();

    assert!(heap.store(1).is_err());
    assert_eq!(heap.take(), None);
}

#[test]
fn single_element_round_trip() {
    let mut heap = Heap::min(1).unwrap();
    heap.store(String::from("only")).unwrap();

    assert_eq!(heap.take().as_deref(), Some("only"));
    assert!(heap.is_empty());

    // Reusable after being drained.
    heap.store(String::from("again")).unwrap();
    assert_eq!(heap.peek().map(String::as_str), Some("again"));
}

#[test]
fn duplicates_are_kept() {
    let mut heap = Heap::min(6).unwrap();
    for val in [4, 4, 1, 4, 1, 4] {
        heap.store(val).unwrap();
    }

    assert_eq!(drain(&mut heap), vec![1, 1, 4, 4, 4, 4]);
}

#[test]
fn node_navigation() {
    let mut heap = Heap::min(8).unwrap();
    for val in [1, 2, 3, 4, 5] {
        heap.store(val).unwrap();
    }

    let root = heap.root().unwrap();
    assert_eq!(root.index(), 1);
    assert_eq!(heap.parent(root), None);

    let left = heap.left(root).unwrap();
    let right = heap.right(root).unwrap();
    assert_eq!((left.index(), right.index()), (2, 3));
    assert_eq!(heap.parent(right), Some(root));

    // Index 5 is the last occupied slot, so node 2 has a left and a right child, node 3 has none.
    assert_eq!(heap.left(left).map(|n| n.index()), Some(4));
    assert_eq!(heap.right(left).map(|n| n.index()), Some(5));
    assert_eq!(heap.left(right), None);
    assert_eq!(heap.right(right), None);

    assert_eq!(*heap.value(root), 1);
}

#[test]
fn empty_heap_has_no_root() {
    let heap = Heap::<i32>::min(3).unwrap();
    assert_eq!(heap.root(), None);
}

#[test]
fn heap_sorter_name_and_result() {
    let mut v = [3, 1, 2];
    HeapSorter.sort(&mut v);

    assert_eq!(v, [1, 2, 3]);
    assert_eq!(Sorter::<i32>::name(&HeapSorter), "Heap");
}

/// Compared by `key` only, `tag` tells equal keys apart. Deliberately not `Default`.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    tag: char,
}

impl Tagged {
    fn new(key: i32, tag: char) -> Self {
        Self { key, tag }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn sift_down_prefers_left_child_on_ties() {
    let mut heap = Heap::min(4).unwrap();
    for val in [
        Tagged::new(0, 'r'),
        Tagged::new(5, 'L'),
        Tagged::new(5, 'R'),
        Tagged::new(9, 'x'),
    ] {
        heap.store(val).unwrap();
    }

    // 9 moves to the root and has to sink below one of the two equal children.
    assert_eq!(heap.take().map(|t| t.tag), Some('r'));
    let root = heap.root().unwrap();
    assert_eq!(heap.value(root).tag, 'L');
    assert_eq!(heap.value(heap.right(root).unwrap()).tag, 'R');
    assert_eq!(heap.value(heap.left(root).unwrap()).key, 9);
}

#[test]
fn sift_down_prefers_left_child_on_ties_max() {
    let mut heap = Heap::max(4).unwrap();
    for val in [
        Tagged::new(9, 'r'),
        Tagged::new(5, 'L'),
        Tagged::new(5, 'R'),
        Tagged::new(0, 'x'),
    ] {
        heap.store(val).unwrap();
    }

    assert_eq!(heap.take().map(|t| t.tag), Some('r'));
    assert_eq!(heap.peek().map(|t| t.tag), Some('L'));
}

#[test]
fn heap_sorter_without_default() {
    let mut v = [
        Tagged::new(3, 'a'),
        Tagged::new(-1, 'b'),
        Tagged::new(3, 'c'),
        Tagged::new(0, 'd'),
        Tagged::new(-7, 'e'),
        Tagged::new(3, 'f'),
    ];
    HeapSorter.sort(&mut v);

    let keys: Vec<i32> = v.iter().map(|t| t.key).collect();
    assert_eq!(keys, [-7, -1, 0, 3, 3, 3]);

    let mut tags: Vec<char> = v.iter().map(|t| t.tag).collect();
    tags.sort();
    assert_eq!(tags, ['a', 'b', 'c', 'd', 'e', 'f']);
}

#[derive(Debug, Clone)]
enum Op {
    Store(i32),
    Take,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Store),
        2 => Just(Op::Take),
    ]
}

fn order_strategy() -> impl Strategy<Value = HeapOrder> {
    prop_oneof![Just(HeapOrder::Min), Just(HeapOrder::Max)]
}

proptest! {
    #[test]
    fn heap_property_holds_after_every_op(
        order in order_strategy(),
        capacity in 0usize..64,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut heap = Heap::new(capacity, order).unwrap();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Store(val) => {
                    let stored = heap.store(val);
                    if model.len() == capacity {
                        prop_assert!(stored.is_err());
                    } else {
                        prop_assert!(stored.is_ok());
                        model.push(val);
                    }
                }
                Op::Take => {
                    let expected = match order {
                        HeapOrder::Min => model.iter().copied().min(),
                        HeapOrder::Max => model.iter().copied().max(),
                    };
                    let taken = heap.take();
                    prop_assert_eq!(taken, expected);

                    if let Some(val) = taken {
                        let pos = model.iter().position(|&m| m == val).unwrap();
                        model.swap_remove(pos);
                    }
                }
            }

            prop_assert!(heap.satisfies_heap_property());
            prop_assert!(heap.len() <= heap.capacity());
            prop_assert_eq!(heap.len(), model.len());
        }
    }

    #[test]
    fn drain_is_ordered_permutation(order in order_strategy(), values in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut heap = Heap::new(values.len(), order).unwrap();
        for &val in &values {
            heap.store(val).unwrap();
        }

        let drained = drain(&mut heap);

        let mut expected = values.clone();
        expected.sort();
        if order == HeapOrder::Max {
            expected.reverse();
        }
        prop_assert_eq!(drained, expected);
    }
}
