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

//! Copying, filling and rearranging sequences.
//!
//! The `*_copy` variants write through an [`OutputPosition`] and return it advanced past the last written element. The in-place variants require a [`MutablePosition`]. Algorithms that drop elements (`remove`, `unique`) swap them to the tail of the sequence: after the call, `[first, result)` holds the kept elements and `[result, last)` the dropped ones, in unspecified order.

use crate::position::*;
use rand::Rng;

pub fn copy<P, O>(mut first: P, last: P, mut result: O) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  while first != last {
    result.put(first.item().clone());
    first.step();
  }
  result
}

/// Copies `n` elements starting at `first`. The sequence must hold at least `n` elements; `first` is not stepped past the last copied one.
pub fn copy_n<P, O>(mut first: P, n: usize, mut result: O) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  for i in 0..n {
    if i > 0 {
      first.step();
    }
    result.put(first.item().clone());
  }
  result
}

/// Copies `[first, last)` to the elements ending at `d_last`, last element first, so the destination may overlap the end of the source. Returns the position of the first written element.
pub fn copy_backward<P, D>(first: P, mut last: P, mut d_last: D) -> D where
  P: BidirectionalPosition,
  P::Item: Clone,
  D: BidirectionalPosition<Item = P::Item> + MutablePosition
{
  while first != last {
    last.step_back();
    d_last.step_back();
    let value = last.item().clone();
    assign(&d_last, value);
  }
  d_last
}

pub fn transform<P, O, U, F>(mut first: P, last: P, mut result: O, mut op: F) -> O where
  P: InputPosition,
  O: OutputPosition<U>,
  F: FnMut(&P::Item) -> U
{
  while first != last {
    result.put(op(first.item()));
    first.step();
  }
  result
}

/// Writes `op(a, b)` for the pairs of `[first1, last1)` and the sequence starting at `first2`, which must be at least as long.
pub fn transform_binary<P1, P2, O, U, F>(mut first1: P1, last1: P1, mut first2: P2, mut result: O, mut op: F) -> O where
  P1: InputPosition,
  P2: InputPosition,
  O: OutputPosition<U>,
  F: FnMut(&P1::Item, &P2::Item) -> U
{
  while first1 != last1 {
    result.put(op(first1.item(), first2.item()));
    first1.step();
    first2.step();
  }
  result
}

pub fn replace<P>(first: P, last: P, old_value: &P::Item, new_value: &P::Item) where
  P: MutablePosition,
  P::Item: PartialEq + Clone
{
  replace_if(first, last, |x| *x == *old_value, new_value)
}

pub fn replace_if<P, F>(mut first: P, last: P, mut pred: F, new_value: &P::Item) where
  P: MutablePosition,
  P::Item: Clone,
  F: FnMut(&P::Item) -> bool
{
  while first != last {
    if pred(first.item()) {
      assign(&first, new_value.clone());
    }
    first.step();
  }
}

pub fn replace_copy<P, O>(first: P, last: P, result: O, old_value: &P::Item, new_value: &P::Item) -> O where
  P: InputPosition,
  P::Item: PartialEq + Clone,
  O: OutputPosition<P::Item>
{
  replace_copy_if(first, last, result, |x| *x == *old_value, new_value)
}

pub fn replace_copy_if<P, O, F>(mut first: P, last: P, mut result: O, mut pred: F, new_value: &P::Item) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  while first != last {
    let value = if pred(first.item()) { new_value.clone() } else { first.item().clone() };
    result.put(value);
    first.step();
  }
  result
}

/// Moves the elements different from `value` to the front, keeping their order, and returns the end of the kept elements.
pub fn remove<P, V>(first: P, last: P, value: &V) -> P where
  P: MutablePosition,
  P::Item: PartialEq<V>
{
  remove_if(first, last, |x| *x == *value)
}

pub fn remove_if<P, F>(first: P, last: P, mut pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  let mut result = super::find_if(first, last.clone(), &mut pred);
  if result == last {
    return result;
  }
  let mut it = result.clone();
  it.step();
  while it != last {
    if !pred(it.item()) {
      iter_swap(&result, &it);
      result.step();
    }
    it.step();
  }
  result
}

pub fn remove_copy<P, O, V>(first: P, last: P, result: O, value: &V) -> O where
  P: InputPosition,
  P::Item: PartialEq<V> + Clone,
  O: OutputPosition<P::Item>
{
  remove_copy_if(first, last, result, |x| *x == *value)
}

pub fn remove_copy_if<P, O, F>(mut first: P, last: P, mut result: O, mut pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  while first != last {
    if !pred(first.item()) {
      result.put(first.item().clone());
    }
    first.step();
  }
  result
}

/// Keeps the first element of every run of equal consecutive elements and returns the end of the kept elements.
pub fn unique<P>(first: P, last: P) -> P where
  P: MutablePosition,
  P::Item: PartialEq
{
  unique_by(first, last, |a, b| a == b)
}

pub fn unique_by<P, F>(mut first: P, last: P, mut pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return last;
  }
  let mut result = first.clone();
  first.step();
  while first != last {
    if !pred(result.item(), first.item()) {
      result.step();
      if result != first {
        iter_swap(&result, &first);
      }
    }
    first.step();
  }
  result.step();
  result
}

pub fn unique_copy<P, O>(first: P, last: P, result: O) -> O where
  P: InputPosition,
  P::Item: PartialEq + Clone,
  O: OutputPosition<P::Item>
{
  unique_copy_by(first, last, result, |a, b| a == b)
}

pub fn unique_copy_by<P, O, F>(mut first: P, last: P, mut result: O, mut pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  if first == last {
    return result;
  }
  let mut kept = first.item().clone();
  result.put(kept.clone());
  first.step();
  while first != last {
    if !pred(&kept, first.item()) {
      kept = first.item().clone();
      result.put(kept.clone());
    }
    first.step();
  }
  result
}

pub fn fill<P>(mut first: P, last: P, value: &P::Item) where
  P: MutablePosition,
  P::Item: Clone
{
  while first != last {
    assign(&first, value.clone());
    first.step();
  }
}

pub fn fill_n<O, T>(mut result: O, n: usize, value: &T) -> O where
  T: Clone,
  O: OutputPosition<T>
{
  for _ in 0..n {
    result.put(value.clone());
  }
  result
}

pub fn generate<P, G>(mut first: P, last: P, mut gen: G) where
  P: MutablePosition,
  G: FnMut() -> P::Item
{
  while first != last {
    assign(&first, gen());
    first.step();
  }
}

pub fn generate_n<O, T, G>(mut result: O, n: usize, mut gen: G) -> O where
  O: OutputPosition<T>,
  G: FnMut() -> T
{
  for _ in 0..n {
    result.put(gen());
  }
  result
}

pub fn reverse<P>(mut first: P, mut last: P) where
  P: BidirectionalPosition + MutablePosition
{
  loop {
    if first == last {
      return;
    }
    last.step_back();
    if first == last {
      return;
    }
    iter_swap(&first, &last);
    first.step();
  }
}

pub fn reverse_copy<P, O>(first: P, mut last: P, mut result: O) -> O where
  P: BidirectionalPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  while first != last {
    last.step_back();
    result.put(last.item().clone());
  }
  result
}

/// Rotates `[first, last)` so that `middle` becomes the first element. Returns the new position of the element that was at `first`.
pub fn rotate<P>(mut first: P, mut middle: P, last: P) -> P where
  P: MutablePosition
{
  if first == middle {
    return last;
  }
  if middle == last {
    return first;
  }
  let mut next = middle.clone();
  loop {
    iter_swap(&first, &next);
    first.step();
    next.step();
    if first == middle {
      middle = next.clone();
    }
    if next == last {
      break;
    }
  }
  let result = first.clone();
  let mut next = middle.clone();
  while next != last {
    iter_swap(&first, &next);
    first.step();
    next.step();
    if first == middle {
      middle = next.clone();
    }
    else if next == last {
      next = middle.clone();
    }
  }
  result
}

pub fn rotate_copy<P, O>(first: P, middle: P, last: P, result: O) -> O where
  P: ForwardPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  let result = copy(middle.clone(), last, result);
  copy(first, middle, result)
}

/// Exchanges `[first1, last1)` with the sequence of the same length starting at `first2`, which may be of another position kind. Returns the end of the second sequence.
pub fn swap_ranges<P1, P2>(mut first1: P1, last1: P1, mut first2: P2) -> P2 where
  P1: MutablePosition,
  P2: MutablePosition<Item = P1::Item>
{
  while first1 != last1 {
    iter_swap(&first1, &first2);
    first1.step();
    first2.step();
  }
  first2
}

/// Uniform random permutation of `[first, last)` drawn from `rng`.
pub fn shuffle<P, R>(first: P, last: P, rng: &mut R) where
  P: RandomAccessPosition + MutablePosition,
  R: Rng + ?Sized
{
  random_shuffle(first, last, |n| rng.random_range(0..n))
}

/// Fisher-Yates permutation where `gen(n)` draws an index in `[0, n)`.
pub fn random_shuffle<P, G>(first: P, last: P, mut gen: G) where
  P: RandomAccessPosition + MutablePosition,
  G: FnMut(usize) -> usize
{
  let len = first.distance_to(&last);
  for i in 1..len.max(0) as usize {
    let j = gen(i + 1);
    if j != i {
      iter_swap(&offset(&first, i), &offset(&first, j));
    }
  }
}
