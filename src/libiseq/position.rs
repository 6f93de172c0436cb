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

//! Positions into a sequence, classified by what they can do.
//!
//! A position designates an element of a sequence, or the place one past its last element. The four tiers mirror the classic iterator categories:
//!
//! * [`InputPosition`]: read the current element and step forward. Stepping may consume the sequence, so an input position is visited once.
//! * [`ForwardPosition`]: an input position that can be cloned and re-traversed.
//! * [`BidirectionalPosition`]: a forward position that can also step back.
//! * [`RandomAccessPosition`]: a bidirectional position that jumps by any offset in constant time and computes distances.
//!
//! Algorithms state the tier they need as a trait bound, so calling an algorithm with a weaker position is a type error. Writes go through [`MutablePosition`] (in-place algorithms) or [`OutputPosition`] (algorithms producing a new sequence).
//!
//! Every primitive integer is a random-access position over the integers themselves (`Item = Self`), which is handy for index sequences:
//!
//! ```rust
//! use iseq::make_range;
//! use iseq::seq;
//!
//! assert_eq!(seq::accumulate(make_range(1..5), 0), 10);
//! ```

/// Read-once position: the current element can be read, then the position steps forward.
pub trait InputPosition: PartialEq
{
  type Item;

  /// The element designated by the position. Reading the one-past-the-end position is a contract violation.
  fn item(&self) -> &Self::Item;
  fn step(&mut self);
}

/// Multi-pass position: clones traverse the same elements independently.
///
/// `advance_by` and `steps_to` walk one step at a time; random-access positions override them with `jump` and `distance_to` so that bisecting algorithms stay logarithmic in position moves.
pub trait ForwardPosition: InputPosition + Clone
{
  /// Moves the position `n` elements forward.
  fn advance_by(&mut self, n: usize) {
    for _ in 0..n {
      self.step();
    }
  }

  /// Number of steps from `self` to `other`, which must be reachable from `self`.
  fn steps_to(&self, other: &Self) -> usize {
    let mut p = self.clone();
    let mut n = 0;
    while p != *other {
      p.step();
      n += 1;
    }
    n
  }
}

pub trait BidirectionalPosition: ForwardPosition
{
  fn step_back(&mut self);
}

pub trait RandomAccessPosition: BidirectionalPosition + PartialOrd
{
  /// Moves the position by `n` elements, backward if `n` is negative.
  fn jump(&mut self, n: isize);

  /// Number of steps from `self` to `other`, negative if `other` comes first.
  fn distance_to(&self, other: &Self) -> isize;
}

/// Position through which the designated element can be overwritten in place.
///
/// Clones of a mutable position share the underlying sequence, hence the write primitives are `unsafe`: the caller guarantees that no reference obtained from `item` on a position designating the same element is alive during the write. The algorithms of this crate never keep such a reference across a write.
///
/// # Safety
///
/// `item_ptr` must return a pointer to the initialized element designated by the position, valid for reads and writes as long as the sequence is borrowed, or panic when the position designates no element.
pub unsafe trait MutablePosition: ForwardPosition
{
  fn item_ptr(&self) -> *mut Self::Item;

  /// Overwrites the designated element with `value`.
  unsafe fn set_item(&self, value: Self::Item) {
    *self.item_ptr() = value;
  }

  /// Exchanges the elements designated by `self` and `other`, which may be positions of different sequences or kinds.
  unsafe fn swap_items<Q>(&self, other: &Q) where
    Q: MutablePosition<Item = Self::Item>
  {
    std::ptr::swap(self.item_ptr(), other.item_ptr());
  }
}

/// Destination of a copying algorithm: each `put` writes a value and advances.
pub trait OutputPosition<T>
{
  fn put(&mut self, value: T);
}

pub fn next<P: InputPosition>(mut position: P) -> P {
  position.step();
  position
}

pub fn prev<P: BidirectionalPosition>(mut position: P) -> P {
  position.step_back();
  position
}

/// Moves `position` forward by `n` elements; constant time for random-access positions.
pub fn advance<P: ForwardPosition>(position: &mut P, n: usize) {
  position.advance_by(n);
}

/// Number of steps from `first` to `last`; linear for forward positions, constant time for random-access ones.
pub fn distance<P: ForwardPosition>(first: &P, last: &P) -> usize {
  first.steps_to(last)
}

/// Position `n` elements after `position`, in constant time.
pub fn offset<P: RandomAccessPosition>(position: &P, n: usize) -> P {
  let mut p = position.clone();
  p.jump(n as isize);
  p
}

/// Exchanges two elements of the sequences being rearranged by an algorithm of this crate.
pub(crate) fn iter_swap<P, Q>(a: &P, b: &Q) where
  P: MutablePosition,
  Q: MutablePosition<Item = P::Item>
{
  // SAFETY: the element references of the algorithms are temporaries of their comparisons and never outlive a swap.
  unsafe { a.swap_items(b) }
}

pub(crate) fn assign<P: MutablePosition>(position: &P, value: P::Item) {
  // SAFETY: see `iter_swap`, the value is owned before the write starts.
  unsafe { position.set_item(value) }
}

macro_rules! counting_position_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl InputPosition for $t
    {
      type Item = $t;

      fn item(&self) -> &$t {
        self
      }

      fn step(&mut self) {
        *self += 1;
      }
    }

    impl ForwardPosition for $t
    {
      fn advance_by(&mut self, n: usize) {
        self.jump(n as isize);
      }

      fn steps_to(&self, other: &$t) -> usize {
        self.distance_to(other) as usize
      }
    }

    impl BidirectionalPosition for $t
    {
      fn step_back(&mut self) {
        *self -= 1;
      }
    }

    impl RandomAccessPosition for $t
    {
      fn jump(&mut self, n: isize) {
        *self = (*self as i128 + n as i128) as $t;
      }

      fn distance_to(&self, other: &$t) -> isize {
        (*other as i128 - *self as i128) as isize
      }
    }
  )*}
}

counting_position_impl!(i8,u8,i16,u16,i32,u32,i64,u64,isize,usize);

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn counting_positions_test() {
    let mut p = 3i32;
    assert_eq!(*p.item(), 3);
    p.step();
    assert_eq!(p, 4);
    p.step_back();
    p.jump(-5);
    assert_eq!(p, -2);
    assert_eq!(p.distance_to(&8), 10);
    assert_eq!(8i32.distance_to(&p), -10);
    assert_eq!(offset(&10u8, 5), 15);
  }

  #[test]
  fn helpers_test() {
    assert_eq!(next(0usize), 1);
    assert_eq!(prev(0i64), -1);
    assert_eq!(distance(&2u32, &9u32), 7);
    assert_eq!(distance(&4u32, &4u32), 0);
    let mut p = 0i16;
    advance(&mut p, 12);
    assert_eq!(p, 12);
  }

  /// Random-access position over the integers that counts the single steps taken by all its clones.
  #[derive(Clone, Debug)]
  struct Counted
  {
    value: i64,
    steps: Rc<Cell<usize>>
  }

  impl Counted
  {
    fn new(value: i64, steps: &Rc<Cell<usize>>) -> Counted {
      Counted { value, steps: steps.clone() }
    }
  }

  impl PartialEq for Counted
  {
    fn eq(&self, other: &Self) -> bool {
      self.value == other.value
    }
  }

  impl PartialOrd for Counted
  {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
      self.value.partial_cmp(&other.value)
    }
  }

  impl InputPosition for Counted
  {
    type Item = i64;

    fn item(&self) -> &i64 {
      &self.value
    }

    fn step(&mut self) {
      self.steps.set(self.steps.get() + 1);
      self.value += 1;
    }
  }

  impl ForwardPosition for Counted
  {
    fn advance_by(&mut self, n: usize) {
      self.jump(n as isize);
    }

    fn steps_to(&self, other: &Self) -> usize {
      self.distance_to(other) as usize
    }
  }

  impl BidirectionalPosition for Counted
  {
    fn step_back(&mut self) {
      self.steps.set(self.steps.get() + 1);
      self.value -= 1;
    }
  }

  impl RandomAccessPosition for Counted
  {
    fn jump(&mut self, n: isize) {
      self.value += n as i64;
    }

    fn distance_to(&self, other: &Self) -> isize {
      (other.value - self.value) as isize
    }
  }

  #[test]
  fn bisection_moves_test() {
    use crate::algorithm::{binary_search, equal_range, lower_bound, partition_point, upper_bound};

    let steps = Rc::new(Cell::new(0));
    let first = Counted::new(0, &steps);
    let last = Counted::new(1_000_000, &steps);

    assert!(binary_search(first.clone(), last.clone(), &123_456));
    assert_eq!(lower_bound(first.clone(), last.clone(), &777_777).value, 777_777);
    assert_eq!(upper_bound(first.clone(), last.clone(), &10).value, 11);
    let (lower, upper) = equal_range(first.clone(), last.clone(), &42);
    assert_eq!((lower.value, upper.value), (42, 43));
    assert_eq!(partition_point(first.clone(), last.clone(), |x| *x < 500_000).value, 500_000);
    assert!(steps.get() < 200, "{} single steps", steps.get());
  }

  #[test]
  fn forward_walk_test() {
    let data = [1, 2, 3, 4];
    let first = crate::slice::SlicePosition::new(&data, 0);
    let mut p = first;
    p.advance_by(3);
    assert_eq!(*p.item(), 4);
    assert_eq!(first.steps_to(&p), 3);
    assert_eq!(distance(&p, &p), 0);
  }
}
