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

pub fn for_each<P, F>(range: Range<P>, f: F) -> F where
  P: InputPosition,
  F: FnMut(&P::Item)
{
  let (first, last) = range.into_inner();
  algorithm::for_each(first, last, f)
}

/// The first position holding `value`, or the end of the range.
pub fn find<P, V>(range: Range<P>, value: &V) -> P where
  P: InputPosition,
  P::Item: PartialEq<V>
{
  let (first, last) = range.into_inner();
  algorithm::find(first, last, value)
}

pub fn find_if<P, F>(range: Range<P>, pred: F) -> P where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::find_if(first, last, pred)
}

pub fn find_if_not<P, F>(range: Range<P>, pred: F) -> P where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::find_if_not(first, last, pred)
}

pub fn find_first_of<P1, P2>(range: Range<P1>, candidates: Range<P2>) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), candidates.into_inner());
  algorithm::find_first_of(first1, last1, first2, last2)
}

pub fn find_first_of_by<P1, P2, F>(range: Range<P1>, candidates: Range<P2>, pred: F) -> P1 where
  P1: InputPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), candidates.into_inner());
  algorithm::find_first_of_by(first1, last1, first2, last2, pred)
}

pub fn adjacent_find<P>(range: Range<P>) -> P where
  P: ForwardPosition,
  P::Item: PartialEq
{
  let (first, last) = range.into_inner();
  algorithm::adjacent_find(first, last)
}

pub fn adjacent_find_by<P, F>(range: Range<P>, pred: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::adjacent_find_by(first, last, pred)
}

pub fn count<P, V>(range: Range<P>, value: &V) -> usize where
  P: InputPosition,
  P::Item: PartialEq<V>
{
  let (first, last) = range.into_inner();
  algorithm::count(first, last, value)
}

pub fn count_if<P, F>(range: Range<P>, pred: F) -> usize where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::count_if(first, last, pred)
}

pub fn equal<P1, P2>(range1: Range<P1>, range2: Range<P2>) -> bool where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: PartialEq<P2::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::equal(first1, last1, first2, last2)
}

pub fn equal_by<P1, P2, F>(range1: Range<P1>, range2: Range<P2>, pred: F) -> bool where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::equal_by(first1, last1, first2, last2, pred)
}

pub fn mismatch<P1, P2>(range1: Range<P1>, range2: Range<P2>) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: PartialEq<P2::Item>
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::mismatch(first1, last1, first2, last2)
}

pub fn mismatch_by<P1, P2, F>(range1: Range<P1>, range2: Range<P2>, pred: F) -> (P1, P2) where
  P1: InputPosition,
  P2: InputPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::mismatch_by(first1, last1, first2, last2, pred)
}

/// The first occurrence of `needle` in `range`, or the end of `range`.
pub fn search<P1, P2>(range: Range<P1>, needle: Range<P2>) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), needle.into_inner());
  algorithm::search(first1, last1, first2, last2)
}

pub fn search_by<P1, P2, F>(range: Range<P1>, needle: Range<P2>, pred: F) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), needle.into_inner());
  algorithm::search_by(first1, last1, first2, last2, pred)
}

/// The last occurrence of `needle` in `range`, or the end of `range`.
pub fn find_end<P1, P2>(range: Range<P1>, needle: Range<P2>) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  P1::Item: PartialEq<P2::Item>
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), needle.into_inner());
  algorithm::find_end(first1, last1, first2, last2)
}

pub fn find_end_by<P1, P2, F>(range: Range<P1>, needle: Range<P2>, pred: F) -> P1 where
  P1: ForwardPosition,
  P2: ForwardPosition,
  F: FnMut(&P1::Item, &P2::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range.into_inner(), needle.into_inner());
  algorithm::find_end_by(first1, last1, first2, last2, pred)
}

pub fn search_n<P, V>(range: Range<P>, n: usize, value: &V) -> P where
  P: ForwardPosition,
  P::Item: PartialEq<V>
{
  let (first, last) = range.into_inner();
  algorithm::search_n(first, last, n, value)
}

pub fn search_n_by<P, V, F>(range: Range<P>, n: usize, value: &V, pred: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &V) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::search_n_by(first, last, n, value, pred)
}

pub fn all_of<P, F>(range: Range<P>, pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::all_of(first, last, pred)
}

pub fn any_of<P, F>(range: Range<P>, pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::any_of(first, last, pred)
}

pub fn none_of<P, F>(range: Range<P>, pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::none_of(first, last, pred)
}

pub fn min_element<P>(range: Range<P>) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::min_element(first, last)
}

pub fn min_element_by<P, F>(range: Range<P>, less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::min_element_by(first, last, less)
}

pub fn max_element<P>(range: Range<P>) -> P where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::max_element(first, last)
}

pub fn max_element_by<P, F>(range: Range<P>, less: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::max_element_by(first, last, less)
}

pub fn minmax_element<P>(range: Range<P>) -> (P, P) where
  P: ForwardPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::minmax_element(first, last)
}

pub fn minmax_element_by<P, F>(range: Range<P>, less: F) -> (P, P) where
  P: ForwardPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::minmax_element_by(first, last, less)
}

pub fn lexicographical_compare<P1, P2>(range1: Range<P1>, range2: Range<P2>) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  P1::Item: PartialOrd
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::lexicographical_compare(first1, last1, first2, last2)
}

pub fn lexicographical_compare_by<P1, P2, F>(range1: Range<P1>, range2: Range<P2>, less: F) -> bool where
  P1: InputPosition,
  P2: InputPosition<Item = P1::Item>,
  F: FnMut(&P1::Item, &P1::Item) -> bool
{
  let ((first1, last1), (first2, last2)) = (range1.into_inner(), range2.into_inner());
  algorithm::lexicographical_compare_by(first1, last1, first2, last2, less)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::range::make_range;

  #[test]
  fn absent_values_are_found_at_the_end() {
    let containers: Vec<Vec<i32>> = vec![vec![], vec![1], vec![4, 8, 15, 16, 23, 42]];
    for c in containers {
      let end = *make_range(&c).last();
      assert!(find(make_range(&c), &7) == end);
      assert!(find_if(make_range(&c), |x| *x > 100) == end);
      assert!(adjacent_find(make_range(&c)) == end);
      assert!(search_n(make_range(&c), 2, &3) == end);
    }
  }

  #[test]
  fn empty_ranges_test() {
    let empty: Vec<u8> = vec![];
    let r = make_range(&empty);
    assert_eq!(count(r, &0), 0);
    assert!(all_of(r, |_| false));
    assert!(!any_of(r, |_| true));
    assert!(none_of(r, |_| true));
    assert!(min_element(r) == *r.last());
    assert!(equal(r, make_range(0u8..0)));
    assert!(!lexicographical_compare(r, r));
    let mut calls = 0;
    for_each(r, |_| calls += 1);
    assert_eq!(calls, 0);
  }

  #[test]
  fn whole_range_queries() {
    let v = vec![3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(find(make_range(&v), &5).index(), 4);
    assert_eq!(count(make_range(&v), &1), 2);
    assert_eq!(count_if(make_range(&v), |x| x % 2 == 0), 3);
    assert_eq!(find_first_of(make_range(&v), make_range(&[9, 4])).index(), 2);
    assert_eq!(search(make_range(&v), make_range(&[1, 5])).index(), 3);
    assert_eq!(find_end(make_range(&[1, 2, 1, 2, 3]), make_range(&[1, 2])).index(), 2);
    let (lo, hi) = minmax_element(make_range(&v));
    assert_eq!((*lo.item(), *hi.item()), (1, 9));
    assert_eq!(max_element_by(make_range(&v), |a, b| a % 5 < b % 5).index(), 2);
    let (p1, p2) = mismatch(make_range(&v), make_range(&[3, 1, 4, 2]));
    assert_eq!((p1.index(), p2.index()), (3, 3));
    assert!(lexicographical_compare(make_range(&[1, 2]), make_range(&[1, 3])));
    assert!(equal_by(make_range(&["a", "B"]), make_range(&['A', 'b']), |s, c| s.eq_ignore_ascii_case(&c.to_string())));
  }
}
