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

//! Lexicographic enumeration and comparison of permutations.

use crate::position::*;
use super::modifying::reverse;
use super::search::{count_if, find_if, mismatch_by};

pub fn next_permutation<P>(first: P, last: P) -> bool where
  P: BidirectionalPosition + MutablePosition,
  P::Item: PartialOrd
{
  next_permutation_by(first, last, |a, b| a < b)
}

/// Rearranges `[first, last)` into the next greater permutation in lexicographic order. When the sequence is the greatest permutation, it wraps around to the smallest one (sorted) and `false` is returned.
pub fn next_permutation_by<P, F>(first: P, last: P, mut less: F) -> bool where
  P: BidirectionalPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  permute(first, last, |a, b| less(a, b))
}

pub fn prev_permutation<P>(first: P, last: P) -> bool where
  P: BidirectionalPosition + MutablePosition,
  P::Item: PartialOrd
{
  prev_permutation_by(first, last, |a, b| a < b)
}

/// Rearranges `[first, last)` into the previous permutation in lexicographic order, wrapping around to the greatest one (sorted in decreasing order) and returning `false` when there is none.
pub fn prev_permutation_by<P, F>(first: P, last: P, mut less: F) -> bool where
  P: BidirectionalPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  permute(first, last, |a, b| less(b, a))
}

/// Next permutation for the ordering `before`. The previous permutation is the next one for the reversed ordering.
fn permute<P, F>(first: P, last: P, mut before: F) -> bool where
  P: BidirectionalPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return false;
  }
  let mut i = prev(last.clone());
  if i == first {
    return false;
  }
  loop {
    let tail = i.clone();
    i.step_back();
    if before(i.item(), tail.item()) {
      let mut j = last.clone();
      loop {
        j.step_back();
        if before(i.item(), j.item()) {
          break;
        }
      }
      iter_swap(&i, &j);
      reverse(tail, last);
      return true;
    }
    if i == first {
      reverse(first, last);
      return false;
    }
  }
}

pub fn is_permutation<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> bool where
  P1: ForwardPosition,
  P2: ForwardPosition<Item = P1::Item>,
  P1::Item: PartialEq
{
  is_permutation_by(first1, last1, first2, last2, |a, b| a == b)
}

/// Whether the second sequence is a rearrangement of the first one, elements being compared with the equivalence `pred`. Quadratic in the length of the sequences once their common prefix is skipped.
pub fn is_permutation_by<P1, P2, F>(first1: P1, last1: P1, first2: P2, last2: P2, mut pred: F) -> bool where
  P1: ForwardPosition,
  P2: ForwardPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let (first1, first2) = mismatch_by(first1, last1.clone(), first2, last2.clone(), &mut pred);
  if distance(&first1, &last1) != distance(&first2, &last2) {
    return false;
  }
  let mut it = first1.clone();
  while it != last1 {
    let value = it.item();
    let seen = find_if(first1.clone(), it.clone(), |x| pred(x, value));
    if seen == it {
      let expected = count_if(first2.clone(), last2.clone(), |x| pred(x, value));
      if expected == 0 || count_if(it.clone(), last1.clone(), |x| pred(x, value)) != expected {
        return false;
      }
    }
    it.step();
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::slice::{SliceMutPosition, SlicePosition};

  fn enumerate(mut data: Vec<i32>, forward: bool) -> Vec<Vec<i32>> {
    let mut all = vec![data.clone()];
    loop {
      let more = {
        let (f, l) = SliceMutPosition::bounds(&mut data);
        if forward { next_permutation(f, l) } else { prev_permutation(f, l) }
      };
      if !more {
        return all;
      }
      all.push(data.clone());
    }
  }

  #[test]
  fn lexicographic_enumeration_test() {
    assert_eq!(enumerate(vec![1, 2, 3], true), vec![
      vec![1, 2, 3], vec![1, 3, 2], vec![2, 1, 3],
      vec![2, 3, 1], vec![3, 1, 2], vec![3, 2, 1]
    ]);
    assert_eq!(enumerate(vec![3, 2, 1], false).len(), 6);
    assert_eq!(enumerate(vec![1, 1, 2], true), vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
    assert_eq!(enumerate(vec![], true), vec![Vec::<i32>::new()]);
    assert_eq!(enumerate(vec![7], false), vec![vec![7]]);
  }

  #[test]
  fn wrap_around_test() {
    let mut data = vec![3, 2, 1];
    {
      let (f, l) = SliceMutPosition::bounds(&mut data);
      assert!(!next_permutation(f, l));
    }
    assert_eq!(data, vec![1, 2, 3]);
    {
      let (f, l) = SliceMutPosition::bounds(&mut data);
      assert!(!prev_permutation(f, l));
    }
    assert_eq!(data, vec![3, 2, 1]);
  }

  #[test]
  fn permutation_check_test() {
    let cases = vec![
      (vec![], vec![], true),
      (vec![1, 2, 3], vec![3, 1, 2], true),
      (vec![1, 2, 2], vec![2, 1, 2], true),
      (vec![1, 2, 2], vec![2, 1, 1], false),
      (vec![1, 2], vec![1, 2, 3], false),
      (vec![4, 5, 6], vec![4, 5, 7], false)
    ];
    for (a, b, expected) in cases {
      let result = is_permutation(
        SlicePosition::new(&a, 0), SlicePosition::new(&a, a.len()),
        SlicePosition::new(&b, 0), SlicePosition::new(&b, b.len()));
      assert_eq!(result, expected, "{:?} and {:?}", a, b);
    }
    let (a, b) = (["Ab", "cd"], ["CD", "ab"]);
    assert!(is_permutation_by(
      SlicePosition::new(&a, 0), SlicePosition::new(&a, 2),
      SlicePosition::new(&b, 0), SlicePosition::new(&b, 2),
      |x, y| x.eq_ignore_ascii_case(y)));
  }
}
