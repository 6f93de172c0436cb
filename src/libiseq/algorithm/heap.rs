// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binary max-heaps laid out in a random-access sequence.
//!
//! The element at index `i` dominates its children at `2i + 1` and `2i + 2`: with the ordering `less`, no child is greater than its parent, so the first element is a greatest one.

use crate::position::*;

pub fn push_heap<P>(first: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  push_heap_by(first, last, |a, b| a < b)
}

/// Restores the heap property of `[first, last)` when `[first, last - 1)` is a heap and the last element was just appended.
pub fn push_heap_by<P, F>(first: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = heap_len(&first, &last);
  if len > 1 {
    sift_up(&first, len - 1, &mut less);
  }
}

pub fn pop_heap<P>(first: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  pop_heap_by(first, last, |a, b| a < b)
}

/// Moves the greatest element to the end and makes `[first, last - 1)` a heap again.
pub fn pop_heap_by<P, F>(first: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = heap_len(&first, &last);
  if len > 1 {
    iter_swap(&first, &offset(&first, len - 1));
    sift_down(&first, 0, len - 1, &mut less);
  }
}

pub fn make_heap<P>(first: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  make_heap_by(first, last, |a, b| a < b)
}

pub fn make_heap_by<P, F>(first: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = heap_len(&first, &last);
  for hole in (0..len / 2).rev() {
    sift_down(&first, hole, len, &mut less);
  }
}

pub fn sort_heap<P>(first: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  sort_heap_by(first, last, |a, b| a < b)
}

/// Turns the heap `[first, last)` into a sorted sequence.
pub fn sort_heap_by<P, F>(first: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = heap_len(&first, &last);
  for end in (1..len).rev() {
    iter_swap(&first, &offset(&first, end));
    sift_down(&first, 0, end, &mut less);
  }
}

pub fn is_heap<P>(first: P, last: P) -> bool where
  P: RandomAccessPosition,
  P::Item: PartialOrd
{
  is_heap_by(first, last, |a, b| a < b)
}

pub fn is_heap_by<P, F>(first: P, last: P, less: F) -> bool where
  P: RandomAccessPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  is_heap_until_by(first, last.clone(), less) == last
}

pub fn is_heap_until<P>(first: P, last: P) -> P where
  P: RandomAccessPosition,
  P::Item: PartialOrd
{
  is_heap_until_by(first, last, |a, b| a < b)
}

/// The end of the longest prefix of `[first, last)` that is a heap.
pub fn is_heap_until_by<P, F>(first: P, last: P, mut less: F) -> P where
  P: RandomAccessPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = heap_len(&first, &last);
  for child in 1..len {
    let parent = offset(&first, (child - 1) / 2);
    let position = offset(&first, child);
    if less(parent.item(), position.item()) {
      return position;
    }
  }
  last
}

fn heap_len<P: RandomAccessPosition>(first: &P, last: &P) -> usize {
  first.distance_to(last).max(0) as usize
}

pub(crate) fn sift_down<P, F>(first: &P, mut hole: usize, len: usize, less: &mut F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  loop {
    let left = 2 * hole + 1;
    if left >= len {
      return;
    }
    let mut child = offset(first, left);
    let mut child_index = left;
    if left + 1 < len {
      let right = offset(first, left + 1);
      if less(child.item(), right.item()) {
        child = right;
        child_index = left + 1;
      }
    }
    let parent = offset(first, hole);
    if !less(parent.item(), child.item()) {
      return;
    }
    iter_swap(&parent, &child);
    hole = child_index;
  }
}

fn sift_up<P, F>(first: &P, mut hole: usize, less: &mut F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  while hole > 0 {
    let parent_index = (hole - 1) / 2;
    let parent = offset(first, parent_index);
    let child = offset(first, hole);
    if !less(parent.item(), child.item()) {
      return;
    }
    iter_swap(&parent, &child);
    hole = parent_index;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::slice::{SliceMutPosition, SlicePosition};

  fn heap_check(data: &[i32]) -> bool {
    is_heap(SlicePosition::new(data, 0), SlicePosition::new(data, data.len()))
  }

  #[test]
  fn heap_lifecycle_test() {
    let cases = vec![
      vec![],
      vec![3],
      vec![1, 2],
      vec![5, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
      vec![7, 7, 7, 7],
      (0..40).collect::<Vec<i32>>()
    ];
    for data in cases {
      let mut expected = data.clone();
      expected.sort();
      let mut heap = data.clone();
      {
        let (f, l) = SliceMutPosition::bounds(&mut heap);
        make_heap(f, l);
      }
      assert!(heap_check(&heap), "make_heap {:?}", data);
      if let Some(max) = expected.last() {
        assert_eq!(heap[0], *max);
      }
      {
        let (f, l) = SliceMutPosition::bounds(&mut heap);
        sort_heap(f, l);
      }
      assert_eq!(heap, expected);
    }
  }

  #[test]
  fn push_and_pop() {
    let mut heap = vec![];
    for x in [4, 9, 1, 7, 3, 9, 0] {
      heap.push(x);
      let (f, l) = SliceMutPosition::bounds(&mut heap);
      push_heap(f, l);
      assert!(heap_check(&heap));
    }
    let mut popped = vec![];
    while !heap.is_empty() {
      {
        let (f, l) = SliceMutPosition::bounds(&mut heap);
        pop_heap(f, l);
      }
      popped.push(heap.pop().unwrap_or_default());
      assert!(heap_check(&heap));
    }
    assert_eq!(popped, vec![9, 9, 7, 4, 3, 1, 0]);
  }

  #[test]
  fn heap_prefix_test() {
    let data = [9, 5, 4, 1, 1, 3, 6, 2];
    let (f, l) = (SlicePosition::new(&data, 0), SlicePosition::new(&data, data.len()));
    assert_eq!(is_heap_until(f, l).index(), 6);
    assert!(!is_heap(f, l));

    let mut min_heap = [3, 8, 1, 5];
    {
      let (f, l) = SliceMutPosition::bounds(&mut min_heap);
      make_heap_by(f, l, |a, b| a > b);
    }
    assert_eq!(min_heap[0], 1);
    let (f, l) = (SlicePosition::new(&min_heap, 0), SlicePosition::new(&min_heap, 4));
    assert!(is_heap_by(f, l, |a, b| a > b));
  }
}
