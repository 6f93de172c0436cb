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

use crate::algorithm;
use crate::position::*;
use crate::range::Range;

/// Sorts `range` in increasing order. Equal elements may be reordered.
pub fn sort<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::sort(first, last)
}

pub fn sort_by<P, F>(range: Range<P>, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::sort_by(first, last, less)
}

/// Sorts `range` in increasing order, keeping equal elements in their original order.
pub fn stable_sort<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::stable_sort(first, last)
}

pub fn stable_sort_by<P, F>(range: Range<P>, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::stable_sort_by(first, last, less)
}

/// Places the smallest elements of `range`, sorted, before `middle`. The order of the remaining elements is unspecified.
pub fn partial_sort<P>(range: Range<P>, middle: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::partial_sort(first, middle, last)
}

pub fn partial_sort_by<P, F>(range: Range<P>, middle: P, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::partial_sort_by(first, middle, last, less)
}

/// Copies the smallest elements of `range`, sorted, into `result`, as many as fit. Returns the end of the written elements.
pub fn partial_sort_copy<P, R>(range: Range<P>, result: Range<R>) -> R where
  P: InputPosition,
  P::Item: PartialOrd + Clone,
  R: RandomAccessPosition<Item = P::Item> + MutablePosition
{
  let ((first, last), (r_first, r_last)) = (range.into_inner(), result.into_inner());
  algorithm::partial_sort_copy(first, last, r_first, r_last)
}

pub fn partial_sort_copy_by<P, R, F>(range: Range<P>, result: Range<R>, less: F) -> R where
  P: InputPosition,
  P::Item: Clone,
  R: RandomAccessPosition<Item = P::Item> + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let ((first, last), (r_first, r_last)) = (range.into_inner(), result.into_inner());
  algorithm::partial_sort_copy_by(first, last, r_first, r_last, less)
}

/// Puts at `nth` the element that would be there if `range` was sorted, with no greater element before it and no smaller one after it.
pub fn nth_element<P>(range: Range<P>, nth: P) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::nth_element(first, nth, last)
}

pub fn nth_element_by<P, F>(range: Range<P>, nth: P, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::nth_element_by(first, nth, last, less)
}

pub fn is_sorted<P>(range: Range<P>) -> bool where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::is_sorted(first, last)
}

pub fn is_sorted_by<P, F>(range: Range<P>, less: F) -> bool where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::is_sorted_by(first, last, less)
}

/// The end of the longest sorted prefix of `range`.
pub fn is_sorted_until<P>(range: Range<P>) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::is_sorted_until(first, last)
}

pub fn is_sorted_until_by<P, F>(range: Range<P>, less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::is_sorted_until_by(first, last, less)
}

/// The first position of the sorted `range` whose element is not less than `value`.
pub fn lower_bound<P>(range: Range<P>, value: &P::Item) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::lower_bound(first, last, value)
}

pub fn lower_bound_by<P, F>(range: Range<P>, value: &P::Item, less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::lower_bound_by(first, last, value, less)
}

/// The first position of the sorted `range` whose element is greater than `value`.
pub fn upper_bound<P>(range: Range<P>, value: &P::Item) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::upper_bound(first, last, value)
}

pub fn upper_bound_by<P, F>(range: Range<P>, value: &P::Item, less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::upper_bound_by(first, last, value, less)
}

/// The sub-range of the sorted `range` holding the elements equivalent to `value`.
pub fn equal_range<P>(range: Range<P>, value: &P::Item) -> Range<P> where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  let (lower, upper) = algorithm::equal_range(first, last, value);
  Range::new(lower, upper)
}

pub fn equal_range_by<P, F>(range: Range<P>, value: &P::Item, less: F) -> Range<P> where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  let (lower, upper) = algorithm::equal_range_by(first, last, value, less);
  Range::new(lower, upper)
}

pub fn binary_search<P>(range: Range<P>, value: &P::Item) -> bool where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::binary_search(first, last, value)
}

pub fn binary_search_by<P, F>(range: Range<P>, value: &P::Item, less: F) -> bool where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::binary_search_by(first, last, value, less)
}

/// Merges two sorted ranges into `result`. On ties, the elements of `range1` come first.
pub fn merge<P1, P2, O>(range1: Range<P1>, range2: Range<P2>, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::merge(first1, last1, first2, last2, result)
}

pub fn merge_by<P1, P2, O, F>(range1: Range<P1>, range2: Range<P2>, result: O, less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::merge_by(first1, last1, first2, last2, result, less)
}

/// Merges the sorted halves `[first, middle)` and `[middle, last)` of `range` in place, stably.
pub fn inplace_merge<P>(range: Range<P>, middle: P) where
  P: MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::inplace_merge(first, middle, last)
}

pub fn inplace_merge_by<P, F>(range: Range<P>, middle: P, less: F) where
  P: MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::inplace_merge_by(first, middle, last, less)
}
