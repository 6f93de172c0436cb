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

//! Traversals without a classic counterpart: predicate-gated copies, agreement search and exclusion search.

use crate::position::*;

/// Copies, in order, the elements satisfying `pred`. Returns the output advanced past the last written element.
pub fn copy_if<P, O, F>(mut first: P, last: P, mut result: O, mut pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  while first != last {
    if pred(first.item()) {
      result.put(first.item().clone());
    }
    first.step();
  }
  result
}

/// Copies elements in order and stops at the first one satisfying `pred`, which is not copied.
pub fn copy_until<P, O, F>(mut first: P, last: P, mut result: O, mut pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  while first != last && !pred(first.item()) {
    result.put(first.item().clone());
    first.step();
  }
  result
}

/// Copies elements in order as long as they satisfy `pred`. The first element failing it is not copied.
pub fn copy_while<P, O, F>(first: P, last: P, result: O, mut pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  copy_until(first, last, result, |x| !pred(x))
}

pub fn find_match<P1, P2>(first1: P1, last1: P1, first2: P2) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: PartialEq<P2::Item>
{
  find_match_by(first1, last1, first2, |a, b| a == b)
}

/// Advances both sequences in lock-step until `pred` holds between their current elements, and returns the two positions at that point. When no pair agrees, the result is `last1` paired with the position reached in the second sequence.
///
/// This is the dual of [`mismatch`](super::mismatch). The second sequence is not bounded: it must have at least as many elements left as `[first1, last1)`.
pub fn find_match_by<P1, P2, F>(mut first1: P1, last1: P1, mut first2: P2, mut pred: F) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  while first1 != last1 && !pred(first1.item(), first2.item()) {
    first1.step();
    first2.step();
  }
  (first1, first2)
}

pub fn find_first_not_of<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  find_first_not_of_by(first1, last1, first2, last2, |a, b| a == b)
}

/// The first position of `[first1, last1)` whose element satisfies `pred` with no element of `[first2, last2)`, or `last1`.
///
/// The second sequence is scanned once per element of the first one.
pub fn find_first_not_of_by<P1, P2, F>(mut first1: P1, last1: P1, first2: P2, last2: P2, mut pred: F) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  while first1 != last1 {
    let mut it = first2.clone();
    while it != last2 && !pred(first1.item(), it.item()) {
      it.step();
    }
    if it == last2 {
      return first1;
    }
    first1.step();
  }
  first1
}
