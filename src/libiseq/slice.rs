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

//! Random-access positions into contiguous memory.
//!
//! `SlicePosition` reads a shared slice, `SliceMutPosition` reads and writes a slice borrowed mutably for the lifetime `'a`. Neither carries more than the slice and an index: a position can be moved anywhere, only reading or writing the element checks that the index lies inside the slice.

use crate::position::*;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

pub struct SlicePosition<'a, T>
{
  slice: &'a [T],
  index: usize
}

impl<'a, T> SlicePosition<'a, T>
{
  pub fn new(slice: &'a [T], index: usize) -> SlicePosition<'a, T> {
    SlicePosition { slice, index }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  /// The designated element, borrowed for the lifetime of the slice rather than of the position.
  pub fn get(&self) -> &'a T {
    &self.slice[self.index]
  }
}

impl<'a, T> Clone for SlicePosition<'a, T>
{
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> Copy for SlicePosition<'a, T> {}

impl<'a, T> PartialEq for SlicePosition<'a, T>
{
  fn eq(&self, other: &Self) -> bool {
    self.index == other.index && ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
  }
}

impl<'a, T> PartialOrd for SlicePosition<'a, T>
{
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) {
      Some(self.index.cmp(&other.index))
    }
    else {
      None
    }
  }
}

impl<'a, T> fmt::Debug for SlicePosition<'a, T>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SlicePosition({}/{})", self.index, self.slice.len())
  }
}

impl<'a, T> InputPosition for SlicePosition<'a, T>
{
  type Item = T;

  fn item(&self) -> &T {
    self.get()
  }

  fn step(&mut self) {
    self.index = self.index.wrapping_add(1);
  }
}

impl<'a, T> ForwardPosition for SlicePosition<'a, T>
{
  fn advance_by(&mut self, n: usize) {
    self.index = self.index.wrapping_add(n);
  }

  fn steps_to(&self, other: &Self) -> usize {
    other.index.wrapping_sub(self.index)
  }
}

impl<'a, T> BidirectionalPosition for SlicePosition<'a, T>
{
  fn step_back(&mut self) {
    self.index = self.index.wrapping_sub(1);
  }
}

impl<'a, T> RandomAccessPosition for SlicePosition<'a, T>
{
  fn jump(&mut self, n: isize) {
    self.index = self.index.wrapping_add_signed(n);
  }

  fn distance_to(&self, other: &Self) -> isize {
    other.index.wrapping_sub(self.index) as isize
  }
}

/// Position into a mutably borrowed slice.
///
/// All the positions made from the same slice share it; they stay usable as long as the borrow `'a` they were made from. Writing is only possible through the `unsafe` methods of [`MutablePosition`], whose callers must not hold a reference from `item()` to the overwritten element. It is not an [`OutputPosition`]: write a new sequence through [`SliceOutput`](crate::output::SliceOutput) instead.
///
/// ```compile_fail
/// use iseq::OutputPosition;
/// use iseq::slice::SliceMutPosition;
///
/// let mut data = [1, 2];
/// let (mut first, _) = SliceMutPosition::bounds(&mut data);
/// first.put(3);
/// ```
pub struct SliceMutPosition<'a, T>
{
  base: NonNull<T>,
  len: usize,
  index: usize,
  marker: PhantomData<&'a mut [T]>
}

impl<'a, T> SliceMutPosition<'a, T>
{
  /// The first and one-past-the-last positions of `slice`.
  pub fn bounds(slice: &'a mut [T]) -> (SliceMutPosition<'a, T>, SliceMutPosition<'a, T>) {
    let len = slice.len();
    let base = NonNull::from(slice).cast::<T>();
    let first = SliceMutPosition { base, len, index: 0, marker: PhantomData };
    let last = SliceMutPosition { index: len, ..first.clone() };
    (first, last)
  }

  pub fn index(&self) -> usize {
    self.index
  }

  fn slot(&self) -> *mut T {
    assert!(self.index < self.len,
      "Cannot access the element at position {} of a sequence of length {}.", self.index, self.len);
    // SAFETY: `index < len` and `base` points to `len` elements borrowed for `'a`.
    unsafe { self.base.as_ptr().add(self.index) }
  }
}

impl<'a, T> Clone for SliceMutPosition<'a, T>
{
  fn clone(&self) -> Self {
    SliceMutPosition {
      base: self.base,
      len: self.len,
      index: self.index,
      marker: PhantomData
    }
  }
}

impl<'a, T> PartialEq for SliceMutPosition<'a, T>
{
  fn eq(&self, other: &Self) -> bool {
    self.index == other.index && self.base == other.base
  }
}

impl<'a, T> PartialOrd for SliceMutPosition<'a, T>
{
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self.base == other.base {
      Some(self.index.cmp(&other.index))
    }
    else {
      None
    }
  }
}

impl<'a, T> fmt::Debug for SliceMutPosition<'a, T>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SliceMutPosition({}/{})", self.index, self.len)
  }
}

impl<'a, T> InputPosition for SliceMutPosition<'a, T>
{
  type Item = T;

  fn item(&self) -> &T {
    // SAFETY: writes only happen through `MutablePosition`, whose callers release element references first.
    unsafe { &*self.slot() }
  }

  fn step(&mut self) {
    self.index = self.index.wrapping_add(1);
  }
}

impl<'a, T> ForwardPosition for SliceMutPosition<'a, T>
{
  fn advance_by(&mut self, n: usize) {
    self.index = self.index.wrapping_add(n);
  }

  fn steps_to(&self, other: &Self) -> usize {
    other.index.wrapping_sub(self.index)
  }
}

impl<'a, T> BidirectionalPosition for SliceMutPosition<'a, T>
{
  fn step_back(&mut self) {
    self.index = self.index.wrapping_sub(1);
  }
}

impl<'a, T> RandomAccessPosition for SliceMutPosition<'a, T>
{
  fn jump(&mut self, n: isize) {
    self.index = self.index.wrapping_add_signed(n);
  }

  fn distance_to(&self, other: &Self) -> isize {
    other.index.wrapping_sub(self.index) as isize
  }
}

// SAFETY: `slot` panics unless the index designates one of the `len` elements borrowed for `'a`.
unsafe impl<'a, T> MutablePosition for SliceMutPosition<'a, T>
{
  fn item_ptr(&self) -> *mut T {
    self.slot()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_only_positions() {
    let data = [10, 20, 30, 40];
    let mut p = SlicePosition::new(&data, 0);
    let last = SlicePosition::new(&data, data.len());
    assert_eq!(*p.item(), 10);
    p.jump(3);
    assert_eq!(*p.item(), 40);
    p.step();
    assert!(p == last);
    p.step_back();
    assert_eq!(p.get(), &40);
    assert_eq!(SlicePosition::new(&data, 1).distance_to(&last), 3);
    assert!(SlicePosition::new(&data, 1) < last);
  }

  #[test]
  fn positions_of_distinct_slices_are_unordered() {
    let a = [1, 2];
    let b = [1, 2];
    let pa = SlicePosition::new(&a, 0);
    let pb = SlicePosition::new(&b, 0);
    assert!(pa != pb);
    assert_eq!(pa.partial_cmp(&pb), None);
  }

  #[test]
  fn write_through_positions() {
    let mut data = vec![1, 2, 3];
    {
      let (first, last) = SliceMutPosition::bounds(&mut data);
      assert_eq!(first.distance_to(&last), 3);
      let mut second = first.clone();
      second.step();
      unsafe {
        first.swap_items(&second);
        second.set_item(7);
      }
      let mut third = last.clone();
      third.step_back();
      unsafe { third.set_item(9) };
      third.step();
      assert!(third == last);
    }
    assert_eq!(data, vec![2, 7, 9]);
  }

  #[test]
  #[should_panic]
  fn reading_past_the_end_panics() {
    let mut data = [1, 2];
    let (_, last) = SliceMutPosition::bounds(&mut data);
    let _ = last.item();
  }
}
