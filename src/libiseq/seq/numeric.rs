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
use num_traits::One;
use std::ops::{Add, Mul, Sub};

/// Sum of `init` and every element of `range`.
pub fn accumulate<P, V>(range: Range<P>, init: V) -> V where
  P: InputPosition,
  P::Item: Clone,
  V: Add<P::Item, Output = V>
{
  let (first, last) = range.into_inner();
  algorithm::accumulate(first, last, init)
}

pub fn accumulate_by<P, V, F>(range: Range<P>, init: V, op: F) -> V where
  P: InputPosition,
  F: FnMut(V, &P::Item) -> V
{
  let (first, last) = range.into_inner();
  algorithm::accumulate_by(first, last, init, op)
}

/// `init` plus the products of the elements of `range` with those of the sequence starting at `first2`, which must be at least as long.
pub fn inner_product<P1, P2, V>(range: Range<P1>, first2: P2, init: V) -> V where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: Clone + Mul<P2::Item>,
  P2::Item: Clone,
  V: Add<<P1::Item as Mul<P2::Item>>::Output, Output = V>
{
  let (first1, last1) = range.into_inner();
  algorithm::inner_product(first1, last1, first2, init)
}

pub fn inner_product_by<P1, P2, V, U, A, M>(range: Range<P1>, first2: P2, init: V, add: A, mul: M) -> V where
  P1: InputPosition,
  P2: InputPosition,
  A: FnMut(V, U) -> V,
  M: FnMut(&P1::Item, &P2::Item) -> U
{
  let (first1, last1) = range.into_inner();
  algorithm::inner_product_by(first1, last1, first2, init, add, mul)
}

pub fn adjacent_difference<P, O>(range: Range<P>, result: O) -> O where
  P: InputPosition,
  P::Item: Clone + Sub<Output = P::Item>,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::adjacent_difference(first, last, result)
}

pub fn adjacent_difference_by<P, O, F>(range: Range<P>, result: O, op: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item, &P::Item) -> P::Item
{
  let (first, last) = range.into_inner();
  algorithm::adjacent_difference_by(first, last, result, op)
}

pub fn partial_sum<P, O>(range: Range<P>, result: O) -> O where
  P: InputPosition,
  P::Item: Clone + Add<Output = P::Item>,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::partial_sum(first, last, result)
}

pub fn partial_sum_by<P, O, F>(range: Range<P>, result: O, op: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item, &P::Item) -> P::Item
{
  let (first, last) = range.into_inner();
  algorithm::partial_sum_by(first, last, result, op)
}

/// Fills `range` with consecutive values starting at `value`.
pub fn iota<P>(range: Range<P>, value: P::Item) where
  P: MutablePosition,
  P::Item: Clone + One + Add<Output = P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::iota(first, last, value)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::output::back_inserter;
  use crate::range::{make_range, make_stream_range};

  #[test]
  fn sums_and_products() {
    let cases = vec![
      (vec![], 0),
      (vec![7], 7),
      (vec![1, 2, 3, 4], 10),
      (vec![-5, 5, 12], 12)
    ];
    for (data, expected) in cases {
      assert_eq!(accumulate(make_range(&data), 0), expected, "{:?}", data);
    }
    assert_eq!(accumulate_by(make_range(&[2, 3, 4]), 1i32, |acc, x| acc * x), 24);
    assert_eq!(accumulate(Range::new(1u64, 101), 0u64), 5050);

    let (a, b) = ([1, 2, 3], [4, 5, 6, 100]);
    assert_eq!(inner_product(make_range(&a), *make_range(&b).first(), 0), 32);
    let max_sum = inner_product_by(make_range(&a), *make_range(&b).first(), 0,
      |acc: i32, m: i32| acc.max(m), |x: &i32, y: &i32| x + y);
    assert_eq!(max_sum, 9);
  }

  #[test]
  fn stream_sums_test() {
    let input = "10 20 30\n40".as_bytes();
    assert_eq!(accumulate(make_stream_range::<i64, _>(input), 0), 100);
    let words = "ab cd ef".as_bytes();
    let joined = accumulate_by(make_stream_range::<String, _>(words), String::new(), |mut acc, w| {
      acc.push_str(w);
      acc
    });
    assert_eq!(joined, "abcdef");
  }

  #[test]
  fn scans_and_sequences() {
    let mut sums = vec![];
    partial_sum(make_range(&[1, 2, 3, 4]), back_inserter(&mut sums));
    assert_eq!(sums, vec![1, 3, 6, 10]);
    let mut diffs = vec![];
    adjacent_difference(make_range(&sums), back_inserter(&mut diffs));
    assert_eq!(diffs, vec![1, 2, 3, 4]);

    let mut products = vec![];
    partial_sum_by(make_range(&[1, 2, 3, 4]), back_inserter(&mut products), |a, b| a * b);
    assert_eq!(products, vec![1, 2, 6, 24]);
    let mut ratios = vec![];
    adjacent_difference_by(make_range(&products), back_inserter(&mut ratios), |cur, prev| cur / prev);
    assert_eq!(ratios, vec![1, 2, 3, 4]);

    let mut v = vec![0u8; 5];
    iota(make_range(&mut v), 3);
    assert_eq!(v, vec![3, 4, 5, 6, 7]);
    let empty: &mut [u8] = &mut [];
    iota(make_range(empty), 9);
  }
}
