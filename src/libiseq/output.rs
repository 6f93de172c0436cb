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

//! Destinations of the copying algorithms.
//!
//! An algorithm writing a sequence takes its destination by value and gives it back advanced past the last written element, so the caller learns where the output stopped:
//!
//! ```rust
//! use iseq::make_range;
//! use iseq::output::SliceOutput;
//! use iseq::seq;
//!
//! let mut buffer = [0; 4];
//! let out = seq::copy_if(make_range(&[1, 2, 3, 4, 5]), SliceOutput::new(&mut buffer), |x| x % 2 == 1);
//! assert_eq!(out.written(), 3);
//! assert_eq!(buffer, [1, 3, 5, 0]);
//! ```

use crate::position::OutputPosition;
use std::fmt;

/// Writes into a slice of fixed capacity. Writing past the end of the slice panics.
pub struct SliceOutput<'a, T>
{
  slots: &'a mut [T],
  written: usize
}

impl<'a, T> SliceOutput<'a, T>
{
  pub fn new(slots: &'a mut [T]) -> SliceOutput<'a, T> {
    SliceOutput { slots, written: 0 }
  }

  /// Number of elements written so far, which is also the index of the next slot.
  pub fn written(&self) -> usize {
    self.written
  }

  /// The slots written so far.
  pub fn into_written(self) -> &'a mut [T] {
    let SliceOutput { slots, written } = self;
    &mut slots[..written]
  }
}

impl<'a, T> OutputPosition<T> for SliceOutput<'a, T>
{
  fn put(&mut self, value: T) {
    assert!(self.written < self.slots.len(),
      "Cannot write past the end of an output slice of length {}.", self.slots.len());
    self.slots[self.written] = value;
    self.written += 1;
  }
}

impl<'a, T> fmt::Debug for SliceOutput<'a, T>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SliceOutput({}/{})", self.written, self.slots.len())
  }
}

/// Appends to a growable container, the destination never runs out of capacity.
pub struct BackInserter<'a, C>
{
  container: &'a mut C
}

impl<'a, C> BackInserter<'a, C>
{
  pub fn new(container: &'a mut C) -> BackInserter<'a, C> {
    BackInserter { container }
  }
}

impl<'a, T, C> OutputPosition<T> for BackInserter<'a, C> where
  C: Extend<T>
{
  fn put(&mut self, value: T) {
    self.container.extend(Some(value));
  }
}

impl<'a, C> fmt::Debug for BackInserter<'a, C>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("BackInserter")
  }
}

pub fn back_inserter<C>(container: &mut C) -> BackInserter<'_, C> {
  BackInserter::new(container)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::VecDeque;

  #[test]
  fn slice_output_test() {
    let mut buffer = [0u8; 3];
    let mut out = SliceOutput::new(&mut buffer);
    out.put(4);
    out.put(2);
    assert_eq!(out.written(), 2);
    assert_eq!(out.into_written(), &mut [4, 2]);
    assert_eq!(buffer, [4, 2, 0]);
  }

  #[test]
  fn slice_output_over_mutable_borrow_test() {
    let source = vec![String::from("left"), String::from("right")];
    let mut slots = vec![String::new(); 3];
    let out = crate::seq::copy(crate::make_range(&source), SliceOutput::new(&mut slots));
    assert_eq!(out.written(), 2);
    assert_eq!(slots, vec!["left", "right", ""]);
  }

  #[test]
  #[should_panic]
  fn slice_output_exhaustion() {
    let mut buffer = [0u8; 1];
    let mut out = SliceOutput::new(&mut buffer);
    out.put(1);
    out.put(2);
  }

  #[test]
  fn back_insertion_test() {
    let mut v = vec![1];
    let mut out = back_inserter(&mut v);
    out.put(2);
    out.put(3);
    assert_eq!(v, vec![1, 2, 3]);

    let mut d = VecDeque::new();
    let mut out = back_inserter(&mut d);
    out.put('a');
    assert_eq!(d.front(), Some(&'a'));
  }
}
