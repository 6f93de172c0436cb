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

/// Rearranges `range` into the next permutation in lexicographic order. Returns `false`, leaving `range` sorted, when it already held the greatest permutation.
pub fn next_permutation<P>(range: Range<P>) -> bool where
  P: BidirectionalPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::next_permutation(first, last)
}

pub fn next_permutation_by<P, F>(range: Range<P>, less: F) -> bool where
  P: BidirectionalPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::next_permutation_by(first, last, less)
}

/// Rearranges `range` into the previous permutation in lexicographic order. Returns `false`, leaving `range` sorted in decreasing order, when it held the smallest permutation.
pub fn prev_permutation<P>(range: Range<P>) -> bool where
  P: BidirectionalPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::prev_permutation(first, last)
}

pub fn prev_permutation_by<P, F>(range: Range<P>, less: F) -> bool where
  P: BidirectionalPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::prev_permutation_by(first, last, less)
}

pub fn is_permutation<P1, P2>(range1: Range<P1>, range2: Range<P2>) -> bool where
  P1: ForwardPosition,
  P2: ForwardPosition<Item = P1::Item>,
  P1::Item: PartialEq
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::is_permutation(first1, last1, first2, last2)
}

pub fn is_permutation_by<P1, P2, F>(range1: Range<P1>, range2: Range<P2>, pred: F) -> bool where
  P1: ForwardPosition,
  P2: ForwardPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::is_permutation_by(first1, last1, first2, last2, pred)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::range::make_range;

  #[test]
  fn every_permutation_is_visited_once() {
    let original = vec!['a', 'b', 'c', 'd'];
    let mut current = original.clone();
    let mut seen = vec![current.clone()];
    while next_permutation(make_range(&mut current)) {
      assert!(is_permutation(make_range(&original), make_range(&current)));
      seen.push(current.clone());
    }
    assert_eq!(seen.len(), 24);
    assert_eq!(current, original);
    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, seen);

    assert!(!prev_permutation(make_range(&mut current)));
    assert_eq!(current, vec!['d', 'c', 'b', 'a']);
    assert!(prev_permutation(make_range(&mut current)));
    assert_eq!(current, vec!['d', 'c', 'a', 'b']);
  }

  #[test]
  fn custom_orderings_test() {
    let mut v = vec![3, 2, 1];
    assert!(next_permutation_by(make_range(&mut v), |a, b| a > b));
    assert_eq!(v, vec![3, 1, 2]);
    assert!(prev_permutation_by(make_range(&mut v), |a, b| a > b));
    assert_eq!(v, vec![3, 2, 1]);
    assert!(is_permutation_by(make_range(&[1, -2, 3]), make_range(&[2, 3, -1]), |a: &i32, b: &i32| a.abs() == b.abs()));
    assert!(!is_permutation(make_range(&[1, 2]), make_range(&[1, 2, 2])));
  }
}
