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
use rand::Rng;

pub use crate::algorithm::{fill_n, generate_n};

pub fn copy<P, O>(range: Range<P>, result: O) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::copy(first, last, result)
}

/// Copies the first `n` elements of `range`, which must hold at least `n` elements.
pub fn copy_n<P, O>(range: Range<P>, n: usize, result: O) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  let (first, _) = range.into_inner();
  algorithm::copy_n(first, n, result)
}

/// Copies `range` to the elements ending at `d_last`, last element first. Returns the position of the first written element.
pub fn copy_backward<P, D>(range: Range<P>, d_last: D) -> D where
  P: BidirectionalPosition,
  P::Item: Clone,
  D: BidirectionalPosition<Item = P::Item> + MutablePosition
{
  let (first, last) = range.into_inner();
  algorithm::copy_backward(first, last, d_last)
}

pub fn transform<P, O, U, F>(range: Range<P>, result: O, op: F) -> O where
  P: InputPosition,
  O: OutputPosition<U>,
  F: FnMut(&P::Item) -> U
{
  let (first, last) = range.into_inner();
  algorithm::transform(first, last, result, op)
}

/// Combines `range` element-wise with the sequence starting at `first2`, which must be at least as long.
pub fn transform_binary<P1, P2, O, U, F>(range: Range<P1>, first2: P2, result: O, op: F) -> O where
  P1: InputPosition,
  P2: InputPosition,
  O: OutputPosition<U>,
  F: FnMut(&P1::Item, &P2::Item) -> U
{
  let (first1, last1) = range.into_inner();
  algorithm::transform_binary(first1, last1, first2, result, op)
}

pub fn replace<P>(range: Range<P>, old_value: &P::Item, new_value: &P::Item) where
  P: MutablePosition,
  P::Item: PartialEq + Clone
{
  let (first, last) = range.into_inner();
  algorithm::replace(first, last, old_value, new_value)
}

pub fn replace_if<P, F>(range: Range<P>, pred: F, new_value: &P::Item) where
  P: MutablePosition,
  P::Item: Clone,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::replace_if(first, last, pred, new_value)
}

pub fn replace_copy<P, O>(range: Range<P>, result: O, old_value: &P::Item, new_value: &P::Item) -> O where
  P: InputPosition,
  P::Item: PartialEq + Clone,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::replace_copy(first, last, result, old_value, new_value)
}

pub fn replace_copy_if<P, O, F>(range: Range<P>, result: O, pred: F, new_value: &P::Item) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::replace_copy_if(first, last, result, pred, new_value)
}

/// Moves the elements different from `value` to the front and returns the end of the kept elements.
pub fn remove<P, V>(range: Range<P>, value: &V) -> P where
  P: MutablePosition,
  P::Item: PartialEq<V>
{
  let (first, last) = range.into_inner();
  algorithm::remove(first, last, value)
}

pub fn remove_if<P, F>(range: Range<P>, pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::remove_if(first, last, pred)
}

pub fn remove_copy<P, O, V>(range: Range<P>, result: O, value: &V) -> O where
  P: InputPosition,
  P::Item: PartialEq<V> + Clone,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::remove_copy(first, last, result, value)
}

pub fn remove_copy_if<P, O, F>(range: Range<P>, result: O, pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::remove_copy_if(first, last, result, pred)
}

pub fn unique<P>(range: Range<P>) -> P where
  P: MutablePosition,
  P::Item: PartialEq
{
  let (first, last) = range.into_inner();
  algorithm::unique(first, last)
}

pub fn unique_by<P, F>(range: Range<P>, pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::unique_by(first, last, pred)
}

pub fn unique_copy<P, O>(range: Range<P>, result: O) -> O where
  P: InputPosition,
  P::Item: PartialEq + Clone,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::unique_copy(first, last, result)
}

pub fn unique_copy_by<P, O, F>(range: Range<P>, result: O, pred: F) -> O where
  P: InputPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::unique_copy_by(first, last, result, pred)
}

pub fn fill<P>(range: Range<P>, value: &P::Item) where
  P: MutablePosition,
  P::Item: Clone
{
  let (first, last) = range.into_inner();
  algorithm::fill(first, last, value)
}

pub fn generate<P, G>(range: Range<P>, gen: G) where
  P: MutablePosition,
  G: FnMut() -> P::Item
{
  let (first, last) = range.into_inner();
  algorithm::generate(first, last, gen)
}

pub fn reverse<P>(range: Range<P>) where
  P: BidirectionalPosition + MutablePosition
{
  let (first, last) = range.into_inner();
  algorithm::reverse(first, last)
}

pub fn reverse_copy<P, O>(range: Range<P>, result: O) -> O where
  P: BidirectionalPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::reverse_copy(first, last, result)
}

/// Rotates `range` so that `middle` becomes its first element. Returns the new position of the former first element.
pub fn rotate<P>(range: Range<P>, middle: P) -> P where
  P: MutablePosition
{
  let (first, last) = range.into_inner();
  algorithm::rotate(first, middle, last)
}

pub fn rotate_copy<P, O>(range: Range<P>, middle: P, result: O) -> O where
  P: ForwardPosition,
  P::Item: Clone,
  O: OutputPosition<P::Item>
{
  let (first, last) = range.into_inner();
  algorithm::rotate_copy(first, middle, last, result)
}

/// Exchanges `range` with the sequence of the same length starting at `first2` and returns the end of the latter.
pub fn swap_ranges<P1, P2>(range: Range<P1>, first2: P2) -> P2 where
  P1: MutablePosition,
  P2: MutablePosition<Item = P1::Item>
{
  let (first1, last1) = range.into_inner();
  algorithm::swap_ranges(first1, last1, first2)
}

pub fn shuffle<P, R>(range: Range<P>, rng: &mut R) where
  P: RandomAccessPosition + MutablePosition,
  R: Rng + ?Sized
{
  let (first, last) = range.into_inner();
  algorithm::shuffle(first, last, rng)
}

/// Shuffles `range` with the thread-local generator.
pub fn random_shuffle<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition
{
  shuffle(range, &mut rand::rng())
}

/// Shuffles `range` drawing indices from `gen`, where `gen(n)` returns a value in `[0, n)`.
pub fn random_shuffle_with<P, G>(range: Range<P>, gen: G) where
  P: RandomAccessPosition + MutablePosition,
  G: FnMut(usize) -> usize
{
  let (first, last) = range.into_inner();
  algorithm::random_shuffle(first, last, gen)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::output::{back_inserter, SliceOutput};
  use crate::range::make_range;

  #[test]
  fn swap_vector_with_array_test() {
    let mut v = vec![1, 2, 3];
    let mut a = [7, 8, 9, 10];
    let end = swap_ranges(make_range(&mut v), make_range(&mut a).into_inner().0);
    assert_eq!(end.index(), 3);
    assert_eq!(v, vec![7, 8, 9]);
    assert_eq!(a, [1, 2, 3, 10]);
  }

  #[test]
  fn copies_leave_the_output_unchanged_on_empty_ranges() {
    let empty: Vec<i32> = vec![];
    let mut buffer = [0; 2];
    let out = copy(make_range(&empty), SliceOutput::new(&mut buffer));
    assert_eq!(out.written(), 0);
    let out = reverse_copy(make_range(&empty), out);
    let out = unique_copy(make_range(&empty), out);
    let out = transform(make_range(&empty), out, |x| x + 1);
    assert_eq!(out.written(), 0);
  }

  #[test]
  fn editing_in_place() {
    let mut v = vec![1, 2, 2, 3, 3, 3, 4];
    let end = unique(make_range(&mut v)).index();
    assert_eq!(&v[..end], &[1, 2, 3, 4]);

    let mut v = vec![5, 0, 6, 0, 7];
    let end = remove(make_range(&mut v), &0).index();
    v.truncate(end);
    assert_eq!(v, vec![5, 6, 7]);

    replace_if(make_range(&mut v), |x| *x > 5, &1);
    assert_eq!(v, vec![5, 1, 1]);
    reverse(make_range(&mut v));
    assert_eq!(v, vec![1, 1, 5]);

    let mut letters = vec!['a', 'b', 'c', 'd', 'e'];
    let new_first = {
      let range = make_range(&mut letters);
      let middle = offset(range.first(), 2);
      rotate(range, middle).index()
    };
    assert_eq!(letters, vec!['c', 'd', 'e', 'a', 'b']);
    assert_eq!(new_first, 3);
  }

  #[test]
  fn filling_and_generating() {
    let mut v = vec![0; 3];
    fill(make_range(&mut v), &9);
    assert_eq!(v, vec![9, 9, 9]);
    let mut n = 0;
    generate(make_range(&mut v), || { n += 2; n });
    assert_eq!(v, vec![2, 4, 6]);
    let mut out = vec![];
    fill_n(back_inserter(&mut out), 2, &'z');
    assert_eq!(out, vec!['z', 'z']);
  }

  #[test]
  fn copies_of_whole_ranges() {
    let v = vec![1, 2, 3, 4];
    let mut out = vec![];
    copy_n(make_range(&v), 2, back_inserter(&mut out));
    remove_copy_if(make_range(&v), back_inserter(&mut out), |x| x % 2 == 1);
    replace_copy(make_range(&v), back_inserter(&mut out), &4, &0);
    assert_eq!(out, vec![1, 2, 2, 4, 1, 2, 3, 0]);

    let mut sums = vec![];
    transform_binary(make_range(&v), 10i32, back_inserter(&mut sums), |a, b| a + b);
    assert_eq!(sums, vec![11, 13, 15, 17]);

    let mut rotated = vec![];
    let range = make_range(&v);
    rotate_copy(range, offset(range.first(), 1), back_inserter(&mut rotated));
    assert_eq!(rotated, vec![2, 3, 4, 1]);
  }

  #[test]
  fn shuffles_are_permutations() {
    let mut v: Vec<u16> = (0..64).collect();
    random_shuffle(make_range(&mut v));
    let mut sorted = v.clone();
    sorted.sort();
    assert_eq!(sorted, (0..64).collect::<Vec<_>>());

    let mut w = vec![1, 2, 3];
    random_shuffle_with(make_range(&mut w), |_| 0);
    assert_eq!(w, vec![3, 1, 2]);
  }
}
