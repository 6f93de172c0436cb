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

/// Whether every element of the sorted `range2` is in the sorted `range1`, counting multiplicities.
pub fn includes<P1, P2>(range1: Range<P1>, range2: Range<P2>) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::includes(first1, last1, first2, last2)
}

pub fn includes_by<P1, P2, F>(range1: Range<P1>, range2: Range<P2>, less: F) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::includes_by(first1, last1, first2, last2, less)
}

/// Copies the elements found in either sorted range. An element occurring `m` times in `range1` and `n` times in `range2` is copied `max(m, n)` times.
pub fn set_union<P1, P2, O>(range1: Range<P1>, range2: Range<P2>, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_union(first1, last1, first2, last2, result)
}

pub fn set_union_by<P1, P2, O, F>(range1: Range<P1>, range2: Range<P2>, result: O, less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_union_by(first1, last1, first2, last2, result, less)
}

/// Copies the elements found in both sorted ranges, `min(m, n)` times, taking them from `range1`.
pub fn set_intersection<P1, P2, O>(range1: Range<P1>, range2: Range<P2>, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_intersection(first1, last1, first2, last2, result)
}

pub fn set_intersection_by<P1, P2, O, F>(range1: Range<P1>, range2: Range<P2>, result: O, less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_intersection_by(first1, last1, first2, last2, result, less)
}

/// Copies the elements of the sorted `range1` that are not in the sorted `range2`, `m - n` times when positive.
pub fn set_difference<P1, P2, O>(range1: Range<P1>, range2: Range<P2>, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_difference(first1, last1, first2, last2, result)
}

pub fn set_difference_by<P1, P2, O, F>(range1: Range<P1>, range2: Range<P2>, result: O, less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_difference_by(first1, last1, first2, last2, result, less)
}

/// Copies the elements found in exactly one of the sorted ranges, `|m - n|` times.
pub fn set_symmetric_difference<P1, P2, O>(range1: Range<P1>, range2: Range<P2>, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_symmetric_difference(first1, last1, first2, last2, result)
}

pub fn set_symmetric_difference_by<P1, P2, O, F>(range1: Range<P1>, range2: Range<P2>, result: O, less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::set_symmetric_difference_by(first1, last1, first2, last2, result, less)
}
