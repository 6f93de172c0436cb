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

//! Partitions: the elements satisfying a predicate come before the others.

use crate::position::*;
use super::modifying::rotate;
use super::search::{find_if_not, none_of};

/// Reorders `[first, last)` so the elements satisfying `pred` come first and returns the first element of the second group. The relative order inside each group is not preserved.
pub fn partition<P, F>(first: P, last: P, mut pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  let mut first = find_if_not(first, last.clone(), &mut pred);
  if first == last {
    return first;
  }
  let mut it = first.clone();
  it.step();
  while it != last {
    if pred(it.item()) {
      iter_swap(&it, &first);
      first.step();
    }
    it.step();
  }
  first
}

/// Like [`partition`] but both groups keep the relative order of their elements. Runs in O(n log n) swaps without extra memory.
pub fn stable_partition<P, F>(first: P, last: P, mut pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  let len = distance(&first, &last);
  stable_partition_rec(first, last, &mut pred, len)
}

fn stable_partition_rec<P, F>(first: P, last: P, pred: &mut F, len: usize) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  match len {
    0 => first,
    1 => if pred(first.item()) { next(first) } else { first },
    _ => {
      let half = len / 2;
      let mut middle = first.clone();
      advance(&mut middle, half);
      let left = stable_partition_rec(first, middle.clone(), pred, half);
      let right = stable_partition_rec(middle.clone(), last, pred, len - half);
      rotate(left, middle, right)
    }
  }
}

/// Copies the elements satisfying `pred` to `out_true` and the others to `out_false`.
pub fn partition_copy<P, O1, O2, F>(mut first: P, last: P, mut out_true: O1, mut out_false: O2, mut pred: F) -> (O1, O2) where
  P: InputPosition,
  P::Item: Clone,
  O1: OutputPosition<P::Item>,
  O2: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  while first != last {
    let value = first.item().clone();
    if pred(&value) {
      out_true.put(value);
    }
    else {
      out_false.put(value);
    }
    first.step();
  }
  (out_true, out_false)
}

pub fn is_partitioned<P, F>(mut first: P, last: P, mut pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  while first != last && pred(first.item()) {
    first.step();
  }
  none_of(first, last, pred)
}

/// The first element of the second group of a partitioned sequence, found by bisection.
pub fn partition_point<P, F>(mut first: P, last: P, mut pred: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item) -> bool
{
  let mut len = distance(&first, &last);
  while len > 0 {
    let half = len / 2;
    let mut middle = first.clone();
    advance(&mut middle, half);
    if pred(middle.item()) {
      first = next(middle);
      len = len - half - 1;
    }
    else {
      len = half;
    }
  }
  first
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::output::back_inserter;
  use crate::slice::{SliceMutPosition, SlicePosition};

  fn is_even(x: &i32) -> bool {
    x % 2 == 0
  }

  fn cases() -> Vec<Vec<i32>> {
    vec![
      vec![],
      vec![1],
      vec![2],
      vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
      vec![2, 4, 1, 3],
      vec![1, 3, 2, 4],
      vec![5, 5, 5],
      vec![8, 1, 6, 3, 4, 7, 2, 9, 0]
    ]
  }

  fn split(data: &[i32]) -> (Vec<i32>, Vec<i32>) {
    let evens = data.iter().cloned().filter(is_even).collect();
    let odds = data.iter().cloned().filter(|x| !is_even(x)).collect();
    (evens, odds)
  }

  #[test]
  fn unstable_partition_test() {
    for data in cases() {
      let (evens, _) = split(&data);
      let mut data = data.clone();
      let point = {
        let (f, l) = SliceMutPosition::bounds(&mut data);
        partition(f, l, is_even).index()
      };
      assert_eq!(point, evens.len());
      assert!(data[..point].iter().all(is_even));
      assert!(!data[point..].iter().any(is_even));
    }
  }

  #[test]
  fn stable_partition_keeps_order() {
    for data in cases() {
      let (evens, odds) = split(&data);
      let mut data = data.clone();
      let point = {
        let (f, l) = SliceMutPosition::bounds(&mut data);
        stable_partition(f, l, is_even).index()
      };
      assert_eq!(&data[..point], &evens[..]);
      assert_eq!(&data[point..], &odds[..]);
    }
  }

  #[test]
  fn partition_queries_test() {
    for data in cases() {
      let (evens, odds) = split(&data);
      let (f, l) = (SlicePosition::new(&data, 0), SlicePosition::new(&data, data.len()));
      let (mut t, mut o) = (vec![], vec![]);
      partition_copy(f, l, back_inserter(&mut t), back_inserter(&mut o), is_even);
      assert_eq!((&t, &o), (&evens, &odds));

      let partitioned: Vec<i32> = evens.iter().chain(odds.iter()).cloned().collect();
      let (f, l) = (SlicePosition::new(&partitioned, 0), SlicePosition::new(&partitioned, partitioned.len()));
      assert!(is_partitioned(f, l, is_even));
      assert_eq!(partition_point(f, l, is_even).index(), evens.len());
    }
    let data = [1, 2];
    let (f, l) = (SlicePosition::new(&data, 0), SlicePosition::new(&data, 2));
    assert!(!is_partitioned(f, l, is_even));
  }
}
