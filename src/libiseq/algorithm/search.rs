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

//! Non-modifying traversals: searching, counting and comparing.

use crate::position::*;
use std::cmp::Ordering;

pub fn for_each<P, F>(mut first: P, last: P, mut f: F) -> F where
  P: InputPosition,
  F: FnMut(&P::Item)
{
  while first != last {
    f(first.item());
    first.step();
  }
  f
}

/// The first position whose element equals `value`, or `last`.
pub fn find<P, V>(mut first: P, last: P, value: &V) -> P where
  P: InputPosition,
  P::Item: PartialEq<V>
{
  while first != last && *first.item() != *value {
    first.step();
  }
  first
}

pub fn find_if<P, F>(mut first: P, last: P, mut pred: F) -> P where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  while first != last && !pred(first.item()) {
    first.step();
  }
  first
}

pub fn find_if_not<P, F>(first: P, last: P, mut pred: F) -> P where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  find_if(first, last, |x| !pred(x))
}

/// The first position of `[first1, last1)` whose element equals one of `[first2, last2)`.
pub fn find_first_of<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  find_first_of_by(first1, last1, first2, last2, |a, b| a == b)
}

pub fn find_first_of_by<P1, P2, F>(mut first1: P1, last1: P1, first2: P2, last2: P2, mut pred: F) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  while first1 != last1 {
    let mut it = first2.clone();
    while it != last2 {
      if pred(first1.item(), it.item()) {
        return first1;
      }
      it.step();
    }
    first1.step();
  }
  first1
}

/// The first of two consecutive equal elements, or `last`.
pub fn adjacent_find<P>(first: P, last: P) -> P where
  P: ForwardPosition,
  P::Item: PartialEq
{
  adjacent_find_by(first, last, |a, b| a == b)
}

pub fn adjacent_find_by<P, F>(mut first: P, last: P, mut pred: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return last;
  }
  let mut next = first.clone();
  next.step();
  while next != last {
    if pred(first.item(), next.item()) {
      return first;
    }
    first = next.clone();
    next.step();
  }
  last
}

pub fn count<P, V>(first: P, last: P, value: &V) -> usize where
  P: InputPosition,
  P::Item: PartialEq<V>
{
  count_if(first, last, |x| *x == *value)
}

pub fn count_if<P, F>(mut first: P, last: P, mut pred: F) -> usize where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let mut n = 0;
  while first != last {
    if pred(first.item()) {
      n += 1;
    }
    first.step();
  }
  n
}

/// `true` if both sequences have the same length and equal elements.
pub fn equal<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> bool where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: PartialEq<P2::Item>
{
  equal_by(first1, last1, first2, last2, |a, b| a == b)
}

pub fn equal_by<P1, P2, F>(first1: P1, last1: P1, first2: P2, last2: P2, pred: F) -> bool where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let (end1, end2) = mismatch_impl(first1, &last1, first2, &last2, pred);
  end1 == last1 && end2 == last2
}

/// The first pair of positions, advanced in lock-step, whose elements differ; the walk stops at the end of the shorter sequence.
pub fn mismatch<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: PartialEq<P2::Item>
{
  mismatch_by(first1, last1, first2, last2, |a, b| a == b)
}

pub fn mismatch_by<P1, P2, F>(first1: P1, last1: P1, first2: P2, last2: P2, pred: F) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  mismatch_impl(first1, &last1, first2, &last2, pred)
}

fn mismatch_impl<P1, P2, F>(mut first1: P1, last1: &P1, mut first2: P2, last2: &P2, mut pred: F) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  while first1 != *last1 && first2 != *last2 && pred(first1.item(), first2.item()) {
    first1.step();
    first2.step();
  }
  (first1, first2)
}

/// The first occurrence of the subsequence `[first2, last2)` in `[first1, last1)`, or `last1`. An empty subsequence occurs at `first1`.
pub fn search<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  search_by(first1, last1, first2, last2, |a, b| a == b)
}

pub fn search_by<P1, P2, F>(mut first1: P1, last1: P1, first2: P2, last2: P2, mut pred: F) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  loop {
    let mut it1 = first1.clone();
    let mut it2 = first2.clone();
    loop {
      if it2 == last2 {
        return first1;
      }
      if it1 == last1 {
        return last1;
      }
      if !pred(it1.item(), it2.item()) {
        break;
      }
      it1.step();
      it2.step();
    }
    first1.step();
  }
}

/// The last occurrence of `[first2, last2)` in `[first1, last1)`, or `last1`. An empty subsequence is never found.
pub fn find_end<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  find_end_by(first1, last1, first2, last2, |a, b| a == b)
}

pub fn find_end_by<P1, P2, F>(mut first1: P1, last1: P1, first2: P2, last2: P2, mut pred: F) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  if first2 == last2 {
    return last1;
  }
  let mut result = last1.clone();
  loop {
    let found = search_by(first1, last1.clone(), first2.clone(), last2.clone(), &mut pred);
    if found == last1 {
      return result;
    }
    result = found.clone();
    first1 = found;
    first1.step();
  }
}

/// The first run of `n` consecutive elements equal to `value`, or `last`. A run of length zero is found at `first`.
pub fn search_n<P, V>(first: P, last: P, n: usize, value: &V) -> P where
  P: ForwardPosition,
  P::Item: PartialEq<V>
{
  search_n_by(first, last, n, value, |a, b| a == b)
}

pub fn search_n_by<P, V, F>(mut first: P, last: P, n: usize, value: &V, mut pred: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &V) -> bool
{
  if n == 0 {
    return first;
  }
  while first != last {
    if !pred(first.item(), value) {
      first.step();
      continue;
    }
    let candidate = first.clone();
    let mut run = 1;
    loop {
      if run == n {
        return candidate;
      }
      first.step();
      if first == last {
        return last;
      }
      if !pred(first.item(), value) {
        break;
      }
      run += 1;
    }
  }
  last
}

pub fn all_of<P, F>(mut first: P, last: P, mut pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  while first != last {
    if !pred(first.item()) {
      return false;
    }
    first.step();
  }
  true
}

pub fn any_of<P, F>(first: P, last: P, pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  !none_of(first, last, pred)
}

pub fn none_of<P, F>(first: P, last: P, mut pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  all_of(first, last, |x| !pred(x))
}

pub fn min_element<P>(first: P, last: P) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  min_element_by(first, last, |a, b| a < b)
}

/// The first smallest element, or `last` if the sequence is empty.
pub fn min_element_by<P, F>(first: P, last: P, mut less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return last;
  }
  let mut smallest = first.clone();
  let mut it = first;
  it.step();
  while it != last {
    if less(it.item(), smallest.item()) {
      smallest = it.clone();
    }
    it.step();
  }
  smallest
}

pub fn max_element<P>(first: P, last: P) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  max_element_by(first, last, |a, b| a < b)
}

/// The first largest element, or `last` if the sequence is empty.
pub fn max_element_by<P, F>(first: P, last: P, mut less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return last;
  }
  let mut largest = first.clone();
  let mut it = first;
  it.step();
  while it != last {
    if less(largest.item(), it.item()) {
      largest = it.clone();
    }
    it.step();
  }
  largest
}

pub fn minmax_element<P>(first: P, last: P) -> (P, P) where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  minmax_element_by(first, last, |a, b| a < b)
}

/// The first smallest and the last largest elements, `(last, last)` if the sequence is empty.
pub fn minmax_element_by<P, F>(first: P, last: P, mut less: F) -> (P, P) where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return (last.clone(), last);
  }
  let mut smallest = first.clone();
  let mut largest = first.clone();
  let mut it = first;
  it.step();
  while it != last {
    if less(it.item(), smallest.item()) {
      smallest = it.clone();
    }
    if !less(it.item(), largest.item()) {
      largest = it.clone();
    }
    it.step();
  }
  (smallest, largest)
}

/// `true` if `[first1, last1)` orders strictly before `[first2, last2)` in dictionary order.
pub fn lexicographical_compare<P1, P2>(first1: P1, last1: P1, first2: P2, last2: P2) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd
{
  lexicographical_compare_by(first1, last1, first2, last2, |a, b| a < b)
}

pub fn lexicographical_compare_by<P1, P2, F>(first1: P1, last1: P1, first2: P2, last2: P2, mut less: F) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  lexicographical_order(first1, last1, first2, last2, &mut less) == Ordering::Less
}

pub(crate) fn lexicographical_order<P1, P2, F>(mut first1: P1, last1: P1, mut first2: P2, last2: P2, less: &mut F) -> Ordering where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  while first1 != last1 {
    if first2 == last2 {
      return Ordering::Greater;
    }
    if less(first1.item(), first2.item()) {
      return Ordering::Less;
    }
    if less(first2.item(), first1.item()) {
      return Ordering::Greater;
    }
    first1.step();
    first2.step();
  }
  if first2 == last2 { Ordering::Equal } else { Ordering::Less }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::slice::SlicePosition;

  fn bounds<T>(s: &[T]) -> (SlicePosition<'_, T>, SlicePosition<'_, T>) {
    (SlicePosition::new(s, 0), SlicePosition::new(s, s.len()))
  }

  #[test]
  fn find_family_test() {
    let data = [4, 8, 15, 16, 23, 42];
    let (f, l) = bounds(&data);
    assert_eq!(find(f, l, &15).index(), 2);
    assert_eq!(find(f, l, &99).index(), 6);
    assert_eq!(find_if(f, l, |x| x % 2 == 1).index(), 2);
    assert_eq!(find_if_not(f, l, |x| *x < 16).index(), 3);
    let needles = [42, 16];
    let (nf, nl) = bounds(&needles);
    assert_eq!(find_first_of(f, l, nf, nl).index(), 3);
    assert_eq!(find_first_of(f, l, nl, nl).index(), 6);
  }

  #[test]
  fn adjacent_and_count() {
    let data = [1, 2, 2, 3, 3, 3];
    let (f, l) = bounds(&data);
    assert_eq!(adjacent_find(f, l).index(), 1);
    assert_eq!(adjacent_find_by(f, l, |a, b| a + 1 == *b).index(), 0);
    assert_eq!(adjacent_find(f, f).index(), 0);
    assert_eq!(count(f, l, &3), 3);
    assert_eq!(count_if(f, l, |x| *x < 3), 3);
    assert_eq!(count_if(l, l, |_| true), 0);
  }

  #[test]
  fn equality_and_mismatch() {
    let a = [1, 2, 3];
    let b = [1, 2, 4, 5];
    let (af, al) = bounds(&a);
    let (bf, bl) = bounds(&b);
    assert!(equal(af, al, af, al));
    assert!(!equal(af, al, bf, bl));
    assert!(equal_by(af, al, 2i32, 5i32, |x, y| x + 1 == *y));
    let (ma, mb) = mismatch(af, al, bf, bl);
    assert_eq!((ma.index(), mb.index()), (2, 2));
    let (ma, mb) = mismatch(af, al, af, al);
    assert_eq!((ma.index(), mb.index()), (3, 3));
  }

  #[test]
  fn subsequences_test() {
    let hay = [1, 2, 3, 1, 2, 3, 7];
    let (f, l) = bounds(&hay);
    let needle = [2, 3];
    let (nf, nl) = bounds(&needle);
    assert_eq!(search(f, l, nf, nl).index(), 1);
    assert_eq!(find_end(f, l, nf, nl).index(), 4);
    assert_eq!(search(f, l, nf, nf).index(), 0);
    assert_eq!(find_end(f, l, nf, nf).index(), 7);
    let missing = [3, 2];
    let (mf, ml) = bounds(&missing);
    assert_eq!(search(f, l, mf, ml).index(), 7);
    assert_eq!(find_end(f, l, mf, ml).index(), 7);
  }

  #[test]
  fn runs_test() {
    let cases = vec![
      (vec![1, 1, 0, 1, 1, 1], 3, 1, 3),
      (vec![1, 1, 0, 1, 1, 1], 2, 1, 0),
      (vec![1, 1, 0, 1, 1], 3, 1, 5),
      (vec![0, 0], 0, 1, 0),
      (vec![], 1, 1, 0)
    ];
    for (data, n, value, expected) in cases {
      let (f, l) = bounds(&data);
      assert_eq!(search_n(f, l, n, &value).index(), expected, "{:?} n={}", data, n);
    }
  }

  #[test]
  fn quantifiers_test() {
    let data = [2, 4, 6];
    let (f, l) = bounds(&data);
    assert!(all_of(f, l, |x| x % 2 == 0));
    assert!(!any_of(f, l, |x| *x > 6));
    assert!(none_of(f, l, |x| *x == 5));
    assert!(all_of(l, l, |_| false));
    assert!(!any_of(l, l, |_| true));
  }

  #[test]
  fn extrema_test() {
    let data = [3, 1, 4, 1, 5, 9, 2, 9];
    let (f, l) = bounds(&data);
    assert_eq!(min_element(f, l).index(), 1);
    assert_eq!(max_element(f, l).index(), 5);
    let (lo, hi) = minmax_element(f, l);
    assert_eq!((lo.index(), hi.index()), (1, 7));
    assert_eq!(min_element(l, l).index(), 8);
  }

  #[test]
  fn dictionary_order_test() {
    let cases: Vec<(Vec<i32>, Vec<i32>, bool)> = vec![
      (vec![], vec![], false),
      (vec![], vec![1], true),
      (vec![1], vec![], false),
      (vec![1, 2], vec![1, 3], true),
      (vec![1, 2, 3], vec![1, 2], false),
      (vec![1, 2], vec![1, 2, 0], true)
    ];
    for (a, b, expected) in cases {
      let (af, al) = bounds(&a);
      let (bf, bl) = bounds(&b);
      assert_eq!(lexicographical_compare(af, al, bf, bl), expected, "{:?} < {:?}", a, b);
    }
  }
}
