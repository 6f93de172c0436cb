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

//! Sorting, selection and binary search.
//!
//! Orderings are given as a strict weak ordering `less(a, b)`, true when `a` must come before `b`. The variants without the `_by` suffix use `PartialOrd::lt`. The in-place algorithms only exchange elements, so they never require `Clone`.

use crate::position::*;
use super::heap::{make_heap_by, sift_down, sort_heap_by};
use super::modifying::rotate;

/// Below this length, sorting falls back to insertion sort.
const INSERTION_THRESHOLD: usize = 16;

pub fn sort<P>(first: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  sort_by(first, last, |a, b| a < b)
}

/// Sorts `[first, last)` in O(n log n) comparisons, without preserving the order of equivalent elements.
///
/// Introsort: quicksort with a median-of-three pivot that switches to heapsort when the recursion gets too deep, and finishes small partitions with insertion sort.
pub fn sort_by<P, F>(first: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = span(&first, &last);
  if len < 2 {
    return;
  }
  introsort_loop(first.clone(), last.clone(), depth_limit(len), &mut less);
  insertion_sort(first, last, &mut less);
}

fn introsort_loop<P, F>(first: P, mut last: P, mut depth: usize, less: &mut F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  while span(&first, &last) > INSERTION_THRESHOLD {
    if depth == 0 {
      heap_sort(first, last, less);
      return;
    }
    depth -= 1;
    let cut = partition_pivot(first.clone(), last.clone(), less);
    introsort_loop(cut.clone(), last, depth, less);
    last = cut;
  }
}

fn depth_limit(len: usize) -> usize {
  2 * (usize::BITS - len.leading_zeros()) as usize
}

fn span<P: RandomAccessPosition>(first: &P, last: &P) -> usize {
  first.distance_to(last).max(0) as usize
}

fn heap_sort<P, F>(first: P, last: P, less: &mut F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  make_heap_by(first.clone(), last.clone(), &mut *less);
  sort_heap_by(first, last, &mut *less);
}

/// Partitions around the median of the second, middle and last elements, moved to `first`. Returns the start of the right part.
fn partition_pivot<P, F>(first: P, last: P, less: &mut F) -> P where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let middle = offset(&first, span(&first, &last) / 2);
  let second = next(first.clone());
  move_median_to_first(&first, &second, &middle, &prev(last.clone()), less);
  unguarded_partition(second, last, &first, less)
}

fn move_median_to_first<P, F>(result: &P, a: &P, b: &P, c: &P, less: &mut F) where
  P: MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let median =
    if less(a.item(), b.item()) {
      if less(b.item(), c.item()) { b }
      else if less(a.item(), c.item()) { c }
      else { a }
    }
    else if less(a.item(), c.item()) { a }
    else if less(b.item(), c.item()) { c }
    else { b };
  iter_swap(result, median);
}

/// Hoare partition of `[first, last)` around the element at `pivot`, outside of the range. The sentinels of the median selection keep both scans in bounds.
fn unguarded_partition<P, F>(mut first: P, mut last: P, pivot: &P, less: &mut F) -> P where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  loop {
    while less(first.item(), pivot.item()) {
      first.step();
    }
    last.step_back();
    while less(pivot.item(), last.item()) {
      last.step_back();
    }
    if !(first < last) {
      return first;
    }
    iter_swap(&first, &last);
    first.step();
  }
}

/// Stable insertion sort by adjacent exchanges.
fn insertion_sort<P, F>(first: P, last: P, less: &mut F) where
  P: BidirectionalPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return;
  }
  let mut i = next(first.clone());
  while i != last {
    let mut j = i.clone();
    while j != first {
      let k = prev(j.clone());
      if !less(j.item(), k.item()) {
        break;
      }
      iter_swap(&j, &k);
      j = k;
    }
    i.step();
  }
}

pub fn stable_sort<P>(first: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  stable_sort_by(first, last, |a, b| a < b)
}

/// Sorts `[first, last)` keeping equivalent elements in their original order.
///
/// Merge sort merging in place by rotations: O(n log² n) comparisons and no allocation.
pub fn stable_sort_by<P, F>(first: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  inplace_stable_sort(first, last, &mut less)
}

fn inplace_stable_sort<P, F>(first: P, last: P, less: &mut F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len = span(&first, &last);
  if len < INSERTION_THRESHOLD {
    insertion_sort(first, last, less);
    return;
  }
  let middle = offset(&first, len / 2);
  inplace_stable_sort(first.clone(), middle.clone(), less);
  inplace_stable_sort(middle.clone(), last.clone(), less);
  merge_without_buffer(first, middle, last, len / 2, len - len / 2, less);
}

/// Merges the sorted `[first, middle)` and `[middle, last)` of lengths `len1` and `len2` by splitting both around a cut and rotating the inner halves.
fn merge_without_buffer<P, F>(first: P, middle: P, last: P, len1: usize, len2: usize, less: &mut F) where
  P: MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if len1 == 0 || len2 == 0 {
    return;
  }
  if len1 + len2 == 2 {
    if less(middle.item(), first.item()) {
      iter_swap(&first, &middle);
    }
    return;
  }
  let (first_cut, second_cut, len11, len22);
  if len1 > len2 {
    len11 = len1 / 2;
    let mut cut = first.clone();
    advance(&mut cut, len11);
    second_cut = lower_bound_by(middle.clone(), last.clone(), cut.item(), &mut *less);
    len22 = distance(&middle, &second_cut);
    first_cut = cut;
  }
  else {
    len22 = len2 / 2;
    let mut cut = middle.clone();
    advance(&mut cut, len22);
    first_cut = upper_bound_by(first.clone(), middle.clone(), cut.item(), &mut *less);
    len11 = distance(&first, &first_cut);
    second_cut = cut;
  }
  let new_middle = rotate(first_cut.clone(), middle, second_cut.clone());
  merge_without_buffer(first, first_cut, new_middle.clone(), len11, len22, less);
  merge_without_buffer(new_middle, second_cut, last, len1 - len11, len2 - len22, less);
}

pub fn partial_sort<P>(first: P, middle: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  partial_sort_by(first, middle, last, |a, b| a < b)
}

/// Puts the `middle - first` smallest elements of `[first, last)`, sorted, in `[first, middle)`. The order of the remaining elements is unspecified.
pub fn partial_sort_by<P, F>(first: P, middle: P, last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let heap = span(&first, &middle);
  if heap == 0 {
    return;
  }
  make_heap_by(first.clone(), middle.clone(), &mut less);
  let mut it = middle.clone();
  while it != last {
    if less(it.item(), first.item()) {
      iter_swap(&first, &it);
      sift_down(&first, 0, heap, &mut less);
    }
    it.step();
  }
  sort_heap_by(first, middle, &mut less);
}

pub fn partial_sort_copy<P, R>(first: P, last: P, r_first: R, r_last: R) -> R where
  P: InputPosition,
  P::Item: PartialOrd + Clone,
  R: RandomAccessPosition<Item = P::Item> + MutablePosition
{
  partial_sort_copy_by(first, last, r_first, r_last, |a, b| a < b)
}

/// Copies the smallest elements of `[first, last)`, sorted, to `[r_first, r_last)`, as many as fit. Returns the end of the written elements.
pub fn partial_sort_copy_by<P, R, F>(mut first: P, last: P, r_first: R, r_last: R, mut less: F) -> R where
  P: InputPosition,
  P::Item: Clone,
  R: RandomAccessPosition<Item = P::Item> + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let mut r_end = r_first.clone();
  while first != last && r_end != r_last {
    assign(&r_end, first.item().clone());
    r_end.step();
    first.step();
  }
  let heap = span(&r_first, &r_end);
  if heap == 0 {
    return r_end;
  }
  make_heap_by(r_first.clone(), r_end.clone(), &mut less);
  while first != last {
    if less(first.item(), r_first.item()) {
      assign(&r_first, first.item().clone());
      sift_down(&r_first, 0, heap, &mut less);
    }
    first.step();
  }
  sort_heap_by(r_first, r_end.clone(), &mut less);
  r_end
}

pub fn nth_element<P>(first: P, nth: P, last: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  nth_element_by(first, nth, last, |a, b| a < b)
}

/// Rearranges `[first, last)` so that `nth` holds the element it would hold if the sequence were sorted, no element before it is greater and no element after it is smaller.
///
/// Introselect: quickselect that falls back to a heap selection when partitioning degenerates.
pub fn nth_element_by<P, F>(mut first: P, nth: P, mut last: P, mut less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last || nth == last {
    return;
  }
  let mut depth = depth_limit(span(&first, &last));
  while span(&first, &last) > 3 {
    if depth == 0 {
      partial_sort_by(first, next(nth), last, &mut less);
      return;
    }
    depth -= 1;
    let cut = partition_pivot(first.clone(), last.clone(), &mut less);
    if cut <= nth {
      first = cut;
    }
    else {
      last = cut;
    }
  }
  insertion_sort(first, last, &mut less);
}

pub fn is_sorted<P>(first: P, last: P) -> bool where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  is_sorted_by(first, last, |a, b| a < b)
}

pub fn is_sorted_by<P, F>(first: P, last: P, less: F) -> bool where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  is_sorted_until_by(first, last.clone(), less) == last
}

pub fn is_sorted_until<P>(first: P, last: P) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  is_sorted_until_by(first, last, |a, b| a < b)
}

/// The end of the longest sorted prefix of `[first, last)`.
pub fn is_sorted_until_by<P, F>(mut first: P, last: P, mut less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return last;
  }
  let mut following = next(first.clone());
  while following != last {
    if less(following.item(), first.item()) {
      return following;
    }
    first = following.clone();
    following.step();
  }
  last
}

pub fn lower_bound<P>(first: P, last: P, value: &P::Item) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  lower_bound_by(first, last, value, |a, b| a < b)
}

/// The first position of the sorted `[first, last)` whose element is not less than `value`.
pub fn lower_bound_by<P, F>(mut first: P, last: P, value: &P::Item, mut less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let mut len = distance(&first, &last);
  while len > 0 {
    let half = len / 2;
    let mut middle = first.clone();
    advance(&mut middle, half);
    if less(middle.item(), value) {
      first = next(middle);
      len -= half + 1;
    }
    else {
      len = half;
    }
  }
  first
}

pub fn upper_bound<P>(first: P, last: P, value: &P::Item) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  upper_bound_by(first, last, value, |a, b| a < b)
}

/// The first position of the sorted `[first, last)` whose element is greater than `value`.
pub fn upper_bound_by<P, F>(mut first: P, last: P, value: &P::Item, mut less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let mut len = distance(&first, &last);
  while len > 0 {
    let half = len / 2;
    let mut middle = first.clone();
    advance(&mut middle, half);
    if less(value, middle.item()) {
      len = half;
    }
    else {
      first = next(middle);
      len -= half + 1;
    }
  }
  first
}

pub fn equal_range<P>(first: P, last: P, value: &P::Item) -> (P, P) where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  equal_range_by(first, last, value, |a, b| a < b)
}

/// The subrange of the sorted `[first, last)` equivalent to `value`, that is `(lower_bound, upper_bound)` in a single bisection.
pub fn equal_range_by<P, F>(mut first: P, last: P, value: &P::Item, mut less: F) -> (P, P) where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let mut len = distance(&first, &last);
  while len > 0 {
    let half = len / 2;
    let mut middle = first.clone();
    advance(&mut middle, half);
    if less(middle.item(), value) {
      first = next(middle);
      len -= half + 1;
    }
    else if less(value, middle.item()) {
      len = half;
    }
    else {
      let mut end = first.clone();
      advance(&mut end, len);
      let left = lower_bound_by(first, middle.clone(), value, &mut less);
      let right = upper_bound_by(next(middle), end, value, &mut less);
      return (left, right);
    }
  }
  (first.clone(), first)
}

pub fn binary_search<P>(first: P, last: P, value: &P::Item) -> bool where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  binary_search_by(first, last, value, |a, b| a < b)
}

/// Whether the sorted `[first, last)` contains an element equivalent to `value`.
pub fn binary_search_by<P, F>(first: P, last: P, value: &P::Item, mut less: F) -> bool where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let found = lower_bound_by(first, last.clone(), value, &mut less);
  found != last && !less(value, found.item())
}

pub fn merge<P1, P2, O>(first1: P1, last1: P1, first2: P2, last2: P2, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  merge_by(first1, last1, first2, last2, result, |a, b| a < b)
}

/// Merges two sorted sequences into `result`. On ties the element of the first sequence comes first.
pub fn merge_by<P1, P2, O, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, mut result: O, mut less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  while first1 != last1 && first2 != last2 {
    if less(first2.item(), first1.item()) {
      result.put(first2.item().clone());
      first2.step();
    }
    else {
      result.put(first1.item().clone());
      first1.step();
    }
  }
  while first1 != last1 {
    result.put(first1.item().clone());
    first1.step();
  }
  while first2 != last2 {
    result.put(first2.item().clone());
    first2.step();
  }
  result
}

pub fn inplace_merge<P>(first: P, middle: P, last: P) where
  P: MutablePosition,
  P::Item: PartialOrd
{
  inplace_merge_by(first, middle, last, |a, b| a < b)
}

/// Merges the consecutive sorted sequences `[first, middle)` and `[middle, last)` in place. The merge is stable.
pub fn inplace_merge_by<P, F>(first: P, middle: P, last: P, mut less: F) where
  P: MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let len1 = distance(&first, &middle);
  let len2 = distance(&middle, &last);
  merge_without_buffer(first, middle, last, len1, len2, &mut less);
}
