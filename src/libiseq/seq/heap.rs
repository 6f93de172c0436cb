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

/// Pushes the last element of `range` into the heap formed by the elements before it.
pub fn push_heap<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::push_heap(first, last)
}

pub fn push_heap_by<P, F>(range: Range<P>, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::push_heap_by(first, last, less)
}

/// Moves the greatest element of the heap `range` to its end, the other elements forming a heap again.
pub fn pop_heap<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::pop_heap(first, last)
}

pub fn pop_heap_by<P, F>(range: Range<P>, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::pop_heap_by(first, last, less)
}

/// Rearranges `range` into a max-heap.
pub fn make_heap<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::make_heap(first, last)
}

pub fn make_heap_by<P, F>(range: Range<P>, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::make_heap_by(first, last, less)
}

/// Turns the heap `range` into a range sorted in increasing order.
pub fn sort_heap<P>(range: Range<P>) where
  P: RandomAccessPosition + MutablePosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::sort_heap(first, last)
}

pub fn sort_heap_by<P, F>(range: Range<P>, less: F) where
  P: RandomAccessPosition + MutablePosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::sort_heap_by(first, last, less)
}

pub fn is_heap<P>(range: Range<P>) -> bool where
  P: RandomAccessPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::is_heap(first, last)
}

pub fn is_heap_by<P, F>(range: Range<P>, less: F) -> bool where
  P: RandomAccessPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::is_heap_by(first, last, less)
}

/// The end of the longest prefix of `range` that is a heap.
pub fn is_heap_until<P>(range: Range<P>) -> P where
  P: RandomAccessPosition,
  P::Item: PartialOrd
{
  let (first, last) = range.into_inner();
  algorithm::is_heap_until(first, last)
}

pub fn is_heap_until_by<P, F>(range: Range<P>, less: F) -> P where
  P: RandomAccessPosition,
  F: FnMut(&P::Item, &P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::is_heap_until_by(first, last, less)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::range::make_range;

  #[test]
  fn priority_queue_test() {
    let mut queue = vec![];
    for x in [5, 12, 3, 8, 8, 1] {
      queue.push(x);
      push_heap(make_range(&mut queue));
      assert!(is_heap(make_range(&queue)));
      assert_eq!(queue[0], *queue.iter().max().unwrap_or(&0));
    }
    pop_heap(make_range(&mut queue));
    assert_eq!(queue.pop(), Some(12));
    assert!(is_heap(make_range(&queue)));
    sort_heap(make_range(&mut queue));
    assert_eq!(queue, vec![1, 3, 5, 8, 8]);
  }

  #[test]
  fn heap_orderings_test() {
    let mut v = vec![4, 2, 9, 7];
    make_heap_by(make_range(&mut v), |a, b| a > b);
    assert_eq!(v[0], 2);
    assert!(is_heap_by(make_range(&v), |a, b| a > b));
    sort_heap_by(make_range(&mut v), |a, b| a > b);
    assert_eq!(v, vec![9, 7, 4, 2]);

    assert_eq!(is_heap_until(make_range(&[5, 4, 3, 6])).index(), 3);
    assert_eq!(is_heap_until_by(make_range(&[1, 2, 0]), |a, b| a > b).index(), 2);
    assert!(is_heap(make_range(&Vec::<u8>::new())));
  }
}
