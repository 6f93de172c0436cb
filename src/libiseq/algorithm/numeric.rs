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

//! Folds and scans over sequences of numbers, or of anything with the right operators.

use crate::position::*;
use num_traits::One;
use std::ops::{Add, Mul, Sub};

/// Left fold of `[first, last)` with `+`, starting from `init`.
pub fn accumulate<P, V>(first: P, last: P, init: V) -> V where
  P: InputPosition,
  P::Item: Clone,
  V: Add<P::Item, Output = V>
{
  accumulate_by(first, last, init, |acc, x| acc + x.clone())
}

pub fn accumulate_by<P, V, F>(mut first: P, last: P, init: V, mut op: F) -> V where
  P: InputPosition,
  F: FnMut(V, &P::Item) -> V
{
  let mut acc = init;
  while first != last {
    acc = op(acc, first.item());
    first.step();
  }
  acc
}

/// `init + a0 * b0 + a1 * b1 + ...` over `[first1, last1)` and the sequence starting at `first2`, which must be at least as long.
pub fn inner_product<P1, P2, V>(first1: P1, last1: P1, first2: P2, init: V) -> V where
  P1: InputPosition,
  P2: InputPosition,
  P1::Item: Clone + Mul<P2::Item>,
  P2::Item: Clone,
  V: Add<<P1::Item as Mul<P2::Item>>::Output, Output = V>
{
  let (mut first1, mut first2, mut acc) = (first1, first2, init);
  while first1 != last1 {
    acc = acc + first1.item().clone() * first2.item().clone();
    first1.step();
    first2.step();
  }
  acc
}

/// Generalized inner product: `add(... add(add(init, mul(a0, b0)), mul(a1, b1)) ...)`.
pub fn inner_product_by<P1, P2, V, U, A, M>(mut first1: P1, last1: P1, mut first2: P2, init: V, mut add: A, mut mul: M) -> V where
  P1: InputPosition,
  P2: InputPosition,
  A: FnMut(V, U) -> V,
  M: FnMut(&P1::Item, &P2::Item) -> U
{
  let mut acc = init;
  while first1 != last1 {
    acc = add(acc, mul(first1.item(), first2.item()));
    first1.step();
    first2.step();
  }
  acc
}

/// Writes the first element, then the difference between each element and its predecessor.
pub fn adjacent_difference<P, O>(first: P, last: P, result: O) -> O where
  P: InputPosition,
  P::Item: Clone + Sub<Output = P::Item>,
  O: OutputPosition<P::Item>
{
  adjacent_difference_by(first, last, result, |current, previous| current.clone() - previous.clone())
}

/// Writes the first element, then `op(current, previous)` for each following element.
pub fn adjacent_difference_by<P, O, F>(mut first: P, last: P, mut result: O, mut op: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item, &P::Item) -> P::Item
{
  if first == last {
    return result;
  }
  let mut previous = first.item().clone();
  result.put(previous.clone());
  first.step();
  while first != last {
    let current = first.item().clone();
    result.put(op(&current, &previous));
    previous = current;
    first.step();
  }
  result
}

/// Writes the running sums of `[first, last)`.
pub fn partial_sum<P, O>(first: P, last: P, result: O) -> O where
  P: InputPosition,
  P::Item: Clone + Add<Output = P::Item>,
  O: OutputPosition<P::Item>
{
  partial_sum_by(first, last, result, |acc, x| acc.clone() + x.clone())
}

/// Writes the running folds `a0`, `op(a0, a1)`, `op(op(a0, a1), a2)`...
pub fn partial_sum_by<P, O, F>(mut first: P, last: P, mut result: O, mut op: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item, &P::Item) -> P::Item
{
  if first == last {
    return result;
  }
  let mut acc = first.item().clone();
  result.put(acc.clone());
  first.step();
  while first != last {
    acc = op(&acc, first.item());
    result.put(acc.clone());
    first.step();
  }
  result
}

/// Fills `[first, last)` with `value`, `value + 1`, `value + 2`...
pub fn iota<P>(mut first: P, last: P, mut value: P::Item) where
  P: MutablePosition,
  P::Item: Clone + One + Add<Output = P::Item>
{
  while first != last {
    assign(&first, value.clone());
    value = value + P::Item::one();
    first.step();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::output::back_inserter;
  use crate::slice::{SliceMutPosition, SlicePosition};

  fn bounds<T>(s: &[T]) -> (SlicePosition<'_, T>, SlicePosition<'_, T>) {
    (SlicePosition::new(s, 0), SlicePosition::new(s, s.len()))
  }

  #[test]
  fn folds_test() {
    let data = [1, 2, 3, 4];
    let (f, l) = bounds(&data);
    assert_eq!(accumulate(f, l, 0), 10);
    assert_eq!(accumulate(f, f, 7), 7);
    assert_eq!(accumulate_by(f, l, 1i32, |acc, x| acc * x), 24);
    assert_eq!(accumulate_by(f, l, String::new(), |acc, x| acc + &x.to_string()), "1234");

    let floats = [0.5, 1.5];
    let (ff, fl) = bounds(&floats);
    assert_eq!(accumulate(ff, fl, 1.0), 3.0);
    assert_eq!(inner_product(f, l, 1i32, 0), 1 + 2 * 2 + 3 * 3 + 4 * 4);
    assert_eq!(inner_product_by(ff, fl, f, 0.0, |acc: f64, p: f64| acc + p, |a, b| a * f64::from(*b)), 3.5);
  }

  #[test]
  fn scans_test() {
    let cases = vec![
      (vec![], vec![], vec![]),
      (vec![5], vec![5], vec![5]),
      (vec![1, 4, 9, 16], vec![1, 3, 5, 7], vec![1, 5, 14, 30]),
      (vec![3, 1, 2], vec![3, -2, 1], vec![3, 4, 6])
    ];
    for (data, differences, sums) in cases {
      let (f, l) = bounds(&data);
      let mut out = vec![];
      adjacent_difference(f, l, back_inserter(&mut out));
      assert_eq!(out, differences);
      let mut out = vec![];
      partial_sum(f, l, back_inserter(&mut out));
      assert_eq!(out, sums);
    }

    let data = [2, 3, 4];
    let (f, l) = bounds(&data);
    let mut products = vec![];
    partial_sum_by(f, l, back_inserter(&mut products), |acc, x| acc * x);
    assert_eq!(products, vec![2, 6, 24]);
  }

  #[test]
  fn counting_up_test() {
    let mut data = [0u64; 5];
    let (f, l) = SliceMutPosition::bounds(&mut data);
    iota(f, l, 10);
    assert_eq!(data, [10, 11, 12, 13, 14]);

    let mut floats = [0.0f32; 3];
    let (f, l) = SliceMutPosition::bounds(&mut floats);
    iota(f, l, -1.0);
    assert_eq!(floats, [-1.0, 0.0, 1.0]);
  }
}
