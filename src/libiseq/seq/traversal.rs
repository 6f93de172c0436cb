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

/// Copies, in order, the elements of `range` satisfying `pred`.
pub fn copy_if<P, O, F>(range: Range<P>, result: O, pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::copy_if(first, last, result, pred)
}

/// Copies the elements of `range` preceding the first one satisfying `pred`.
pub fn copy_until<P, O, F>(range: Range<P>, result: O, pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::copy_until(first, last, result, pred)
}

/// Copies the longest prefix of `range` whose elements satisfy `pred`.
pub fn copy_while<P, O, F>(range: Range<P>, result: O, pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::copy_while(first, last, result, pred)
}

/// First pair of corresponding positions holding equal elements, walking `range` and the sequence starting at `first2` together. The second sequence must be at least as long as `range`.
pub fn find_match<P1, P2>(range: Range<P1>, first2: P2) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: PartialEq<P2::Item>
{
  let (first1, last1) = range.into_inner();
  algorithm::find_match(first1, last1, first2)
}

pub fn find_match_by<P1, P2, F>(range: Range<P1>, first2: P2, pred: F) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let (first1, last1) = range.into_inner();
  algorithm::find_match_by(first1, last1, first2, pred)
}

/// The first position of `range` whose element is none of `candidates`, or the end of `range`.
pub fn find_first_not_of<P1, P2>(range: Range<P1>, candidates: Range<P2>) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), candidates.into_inner());
  algorithm::find_first_not_of(first1, last1, first2, last2)
}

pub fn find_first_not_of_by<P1, P2, F>(range: Range<P1>, candidates: Range<P2>, pred: F) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), candidates.into_inner());
  algorithm::find_first_not_of_by(first1, last1, first2, last2, pred)
}
