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

//! Set algebra on sorted sequences.
//!
//! Both inputs must be sorted with the ordering the algorithm is given. Sequences are multisets: an element occurring `m` times in the first input and `n` times in the second occurs `max(m, n)` times in the union, `min(m, n)` times in the intersection, `m - n` times (if positive) in the difference and `|m - n|` times in the symmetric difference. Outputs are sorted.

use crate::position::*;

pub fn includes<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd
{
  includes_by(first1, last1, first2, last2, |a, b| a < b)
}

/// Whether every element of the second sequence occurs in the first one, counting repetitions.
pub fn includes_by<P1, P2, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, mut less: F) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  while first2 != last2 {
    if first1 == last1 || less(first2.item(), first1.item()) {
      return false;
    }
    if !less(first1.item(), first2.item()) {
      first2.step();
    }
    first1.step();
  }
  true
}

pub fn set_union<P1, P2, O>(first1: P1, last1: P1, first2: P2, last2: P2, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  set_union_by(first1, last1, first2, last2, result, |a, b| a < b)
}

pub fn set_union_by<P1, P2, O, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, mut result: O, mut less: F) -> O where
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
      if !less(first1.item(), first2.item()) {
        first2.step();
      }
      result.put(first1.item().clone());
      first1.step();
    }
  }
  copy_rest(first2, last2, copy_rest(first1, last1, result))
}

pub fn set_intersection<P1, P2, O>(first1: P1, last1: P1, first2: P2, last2: P2, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  set_intersection_by(first1, last1, first2, last2, result, |a, b| a < b)
}

/// Writes the elements of the first sequence that also occur in the second one.
pub fn set_intersection_by<P1, P2, O, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, mut result: O, mut less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  while first1 != last1 && first2 != last2 {
    if less(first1.item(), first2.item()) {
      first1.step();
    }
    else {
      if !less(first2.item(), first1.item()) {
        result.put(first1.item().clone());
        first1.step();
      }
      first2.step();
    }
  }
  result
}

pub fn set_difference<P1, P2, O>(first1: P1, last1: P1, first2: P2, last2: P2, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  set_difference_by(first1, last1, first2, last2, result, |a, b| a < b)
}

/// Writes the elements of the first sequence that do not occur in the second one.
pub fn set_difference_by<P1, P2, O, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, mut result: O, mut less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  while first1 != last1 {
    if first2 == last2 {
      return copy_rest(first1, last1, result);
    }
    if less(first1.item(), first2.item()) {
      result.put(first1.item().clone());
      first1.step();
    }
    else {
      if !less(first2.item(), first1.item()) {
        first1.step();
      }
      first2.step();
    }
  }
  result
}

pub fn set_symmetric_difference<P1, P2, O>(first1: P1, last1: P1, first2: P2, last2: P2, result: O) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd + Clone,
  O: OutputPosition<P1::Item>
{
  set_symmetric_difference_by(first1, last1, first2, last2, result, |a, b| a < b)
}

/// Writes the elements occurring in exactly one of the sequences.
pub fn set_symmetric_difference_by<P1, P2, O, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, mut result: O, mut less: F) -> O where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: Clone,
  O: OutputPosition<P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  while first1 != last1 {
    if first2 == last2 {
      return copy_rest(first1, last1, result);
    }
    if less(first1.item(), first2.item()) {
      result.put(first1.item().clone());
      first1.step();
    }
    else {
      if less(first2.item(), first1.item()) {
        result.put(first2.item().clone());
      }
      else {
        first1.step();
      }
      first2.step();
    }
  }
  copy_rest(first2, last2, result)
}

fn copy_rest<P, O>(first: P, last: P, result: O) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  super::modifying::copy(first, last, result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::output::back_inserter;
  use crate::slice::SlicePosition;

  type SetOp = fn(SlicePosition<'_, i32>, SlicePosition<'_, i32>, SlicePosition<'_, i32>, SlicePosition<'_, i32>, &mut Vec<i32>);

  fn run(op: SetOp, a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = vec![];
    op(SlicePosition::new(a, 0), SlicePosition::new(a, a.len()), SlicePosition::new(b, 0), SlicePosition::new(b, b.len()), &mut out);
    out
  }

  fn union(f1: SlicePosition<'_, i32>, l1: SlicePosition<'_, i32>, f2: SlicePosition<'_, i32>, l2: SlicePosition<'_, i32>, out: &mut Vec<i32>) {
    set_union(f1, l1, f2, l2, back_inserter(out));
  }

  fn intersection(f1: SlicePosition<'_, i32>, l1: SlicePosition<'_, i32>, f2: SlicePosition<'_, i32>, l2: SlicePosition<'_, i32>, out: &mut Vec<i32>) {
    set_intersection(f1, l1, f2, l2, back_inserter(out));
  }

  fn difference(f1: SlicePosition<'_, i32>, l1: SlicePosition<'_, i32>, f2: SlicePosition<'_, i32>, l2: SlicePosition<'_, i32>, out: &mut Vec<i32>) {
    set_difference(f1, l1, f2, l2, back_inserter(out));
  }

  fn symmetric_difference(f1: SlicePosition<'_, i32>, l1: SlicePosition<'_, i32>, f2: SlicePosition<'_, i32>, l2: SlicePosition<'_, i32>, out: &mut Vec<i32>) {
    set_symmetric_difference(f1, l1, f2, l2, back_inserter(out));
  }

  #[test]
  fn multiset_algebra_test() {
    // (a, b, a ∪ b, a ∩ b, a \ b, a △ b)
    let cases: Vec<(Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>)> = vec![
      (vec![], vec![], vec![], vec![], vec![], vec![]),
      (vec![1, 2], vec![], vec![1, 2], vec![], vec![1, 2], vec![1, 2]),
      (vec![], vec![3], vec![3], vec![], vec![], vec![3]),
      (vec![1, 2, 3], vec![2, 3, 4], vec![1, 2, 3, 4], vec![2, 3], vec![1], vec![1, 4]),
      (vec![1, 1, 2, 5], vec![1, 5, 5, 6], vec![1, 1, 2, 5, 5, 6], vec![1, 5], vec![1, 2], vec![1, 2, 5, 6]),
      (vec![1, 3, 5], vec![2, 4, 6], vec![1, 2, 3, 4, 5, 6], vec![], vec![1, 3, 5], vec![1, 2, 3, 4, 5, 6])
    ];
    for (a, b, u, i, d, s) in cases {
      assert_eq!(run(union, &a, &b), u, "{:?} ∪ {:?}", a, b);
      assert_eq!(run(intersection, &a, &b), i, "{:?} ∩ {:?}", a, b);
      assert_eq!(run(difference, &a, &b), d, "{:?} \\ {:?}", a, b);
      assert_eq!(run(symmetric_difference, &a, &b), s, "{:?} △ {:?}", a, b);
    }
  }

  #[test]
  fn union_is_intersection_plus_symmetric_difference() {
    let (a, b) = (vec![0, 2, 2, 4, 7, 9], vec![2, 3, 4, 4, 9, 11]);
    let u = run(union, &a, &b);
    let mut parts = run(intersection, &a, &b);
    parts.extend(run(symmetric_difference, &a, &b));
    parts.sort();
    assert_eq!(u, parts);
    assert_eq!(run(difference, &a, &b).len() + run(intersection, &a, &b).len(), a.len());
  }

  #[test]
  fn inclusion_test() {
    let cases = vec![
      (vec![1, 2, 3, 4], vec![2, 4], true),
      (vec![1, 2, 3, 4], vec![], true),
      (vec![], vec![1], false),
      (vec![1, 2, 3], vec![2, 2], false),
      (vec![1, 2, 2, 3], vec![2, 2], true),
      (vec![1, 3], vec![2], false)
    ];
    for (a, b, expected) in cases {
      let included = includes(
        SlicePosition::new(&a, 0), SlicePosition::new(&a, a.len()),
        SlicePosition::new(&b, 0), SlicePosition::new(&b, b.len()));
      assert_eq!(included, expected, "{:?} includes {:?}", a, b);
    }
  }

  #[test]
  fn custom_ordering_test() {
    let (a, b) = ([9, 5, 1], [7, 5, 3]);
    let mut out = vec![];
    set_union_by(
      SlicePosition::new(&a, 0), SlicePosition::new(&a, 3),
      SlicePosition::new(&b, 0), SlicePosition::new(&b, 3),
      back_inserter(&mut out), |x, y| x > y);
    assert_eq!(out, vec![9, 7, 5, 3, 1]);
  }
}
