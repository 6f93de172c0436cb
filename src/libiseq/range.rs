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

//! Whole-sequence ranges.
//!
//! A `Range<P>` is the pair of positions `[first, last)`: the first element of a sequence and the place one past its last element. It is a plain value: copying a range copies two positions, not the sequence. A range does not own the sequence it refers to and is only valid as long as that sequence is neither dropped nor reallocated; for ranges made from Rust containers, the borrow held by the positions enforces this.
//!
//! Nothing checks that `last` is reachable from `first`. Algorithms assume it, exactly like their position-pair counterparts in [`algorithm`](../algorithm/index.html).
//!
//! # Examples
//!
//! ```rust
//! use iseq::{make_range, Range};
//! use iseq::seq;
//!
//! let mut v = vec![5, 3, 7, 3];
//! let pos = seq::find(make_range(&v), &7);
//! assert_eq!(pos.index(), 2);
//!
//! seq::sort(make_range(&mut v));
//! assert_eq!(v, [3, 3, 5, 7]);
//!
//! // Any pair of positions is a range, integers count.
//! assert_eq!(seq::count_if(Range::new(0, 10), |x| x % 3 == 0), 4);
//! ```

use crate::position::*;
use crate::slice::{SliceMutPosition, SlicePosition};
use crate::stream::StreamPosition;
use gcollections::kind::Collection;
use gcollections::ops::Cardinality;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::io::BufRead;
use std::ops;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<P>
{
  first: P,
  last: P
}

impl<P> Range<P>
{
  /// Wraps the positions verbatim, without any check.
  pub fn new(first: P, last: P) -> Range<P> {
    Range { first, last }
  }

  pub fn first(&self) -> &P {
    &self.first
  }

  pub fn last(&self) -> &P {
    &self.last
  }

  pub fn into_inner(self) -> (P, P) {
    (self.first, self.last)
  }

  /// True when `first == last`. Random-access ranges also get `gcollections::ops::IsEmpty` through `Cardinality`.
  pub fn is_empty(&self) -> bool where
    P: PartialEq
  {
    self.first == self.last
  }

  /// Iterates over clones of the elements, consuming the range.
  pub fn iter(self) -> Iter<P> {
    Iter { range: self }
  }
}

impl<P> Collection for Range<P> where
  P: InputPosition
{
  type Item = P::Item;
}

impl<P: RandomAccessPosition> Cardinality for Range<P>
{
  type Size = usize;

  fn size(&self) -> usize {
    let n = self.first.distance_to(&self.last);
    debug_assert!(n >= 0, "The last position of a range must be reachable from the first one.");
    n as usize
  }
}

impl<P: Serialize> Serialize for Range<P>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    (&self.first, &self.last).serialize(serializer)
  }
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for Range<P>
{
  fn deserialize<D>(deserializer: D) -> Result<Range<P>, D::Error> where
    D: Deserializer<'de>
  {
    let (first, last) = <(P, P)>::deserialize(deserializer)?;
    Ok(Range::new(first, last))
  }
}

pub struct Iter<P>
{
  range: Range<P>
}

impl<P> Iterator for Iter<P> where
  P: InputPosition,
  P::Item: Clone
{
  type Item = P::Item;

  fn next(&mut self) -> Option<P::Item> {
    if self.range.first == self.range.last {
      None
    }
    else {
      let value = self.range.first.item().clone();
      self.range.first.step();
      Some(value)
    }
  }
}

impl<P: fmt::Debug> fmt::Debug for Iter<P>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").field(&self.range).finish()
  }
}

impl<P> IntoIterator for Range<P> where
  P: InputPosition,
  P::Item: Clone
{
  type Item = P::Item;
  type IntoIter = Iter<P>;

  fn into_iter(self) -> Iter<P> {
    self.iter()
  }
}

/// Conversion of a sequence, or of something designating one, into the range over all of it.
pub trait ToRange
{
  type Position;
  fn to_range(self) -> Range<Self::Position>;
}

impl<P> ToRange for Range<P>
{
  type Position = P;
  fn to_range(self) -> Range<P> {
    self
  }
}

impl<P> ToRange for (P, P)
{
  type Position = P;
  fn to_range(self) -> Range<P> {
    let (first, last) = self;
    Range::new(first, last)
  }
}

impl<I> ToRange for ops::Range<I>
{
  type Position = I;
  fn to_range(self) -> Range<I> {
    Range::new(self.start, self.end)
  }
}

impl<'a, T> ToRange for &'a [T]
{
  type Position = SlicePosition<'a, T>;
  fn to_range(self) -> Range<SlicePosition<'a, T>> {
    Range::new(SlicePosition::new(self, 0), SlicePosition::new(self, self.len()))
  }
}

impl<'a, T> ToRange for &'a mut [T]
{
  type Position = SliceMutPosition<'a, T>;
  fn to_range(self) -> Range<SliceMutPosition<'a, T>> {
    let (first, last) = SliceMutPosition::bounds(self);
    Range::new(first, last)
  }
}

impl<'a, T, const N: usize> ToRange for &'a [T; N]
{
  type Position = SlicePosition<'a, T>;
  fn to_range(self) -> Range<SlicePosition<'a, T>> {
    self.as_slice().to_range()
  }
}

impl<'a, T, const N: usize> ToRange for &'a mut [T; N]
{
  type Position = SliceMutPosition<'a, T>;
  fn to_range(self) -> Range<SliceMutPosition<'a, T>> {
    self.as_mut_slice().to_range()
  }
}

impl<'a, T> ToRange for &'a Vec<T>
{
  type Position = SlicePosition<'a, T>;
  fn to_range(self) -> Range<SlicePosition<'a, T>> {
    self.as_slice().to_range()
  }
}

impl<'a, T> ToRange for &'a mut Vec<T>
{
  type Position = SliceMutPosition<'a, T>;
  fn to_range(self) -> Range<SliceMutPosition<'a, T>> {
    self.as_mut_slice().to_range()
  }
}

/// The range over all of `sequence`: read-only for shared borrows, writable for mutable ones.
pub fn make_range<S: ToRange>(sequence: S) -> Range<S::Position> {
  sequence.to_range()
}

/// The range over the `count` elements starting at `data`.
///
/// # Safety
///
/// `data` must point to `count` initialized elements that stay valid and unmodified for `'a`, as for `std::slice::from_raw_parts`.
pub unsafe fn make_range_raw<'a, T>(data: *const T, count: usize) -> Range<SlicePosition<'a, T>> {
  std::slice::from_raw_parts(data, count).to_range()
}

/// Mutable counterpart of [`make_range_raw`].
///
/// # Safety
///
/// `data` must point to `count` initialized elements that stay valid for `'a` and are accessed only through the returned range, as for `std::slice::from_raw_parts_mut`.
pub unsafe fn make_range_raw_mut<'a, T>(data: *mut T, count: usize) -> Range<SliceMutPosition<'a, T>> {
  std::slice::from_raw_parts_mut(data, count).to_range()
}

/// The range of the values parsed from `reader`, separated by whitespace.
pub fn make_stream_range<T, R>(reader: R) -> Range<StreamPosition<T, R>> where
  T: FromStr,
  T::Err: fmt::Display,
  R: BufRead
{
  Range::new(StreamPosition::new(reader), StreamPosition::end())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  #[test]
  fn construction_test() {
    let v = vec![1, 2, 3];
    let r = make_range(&v);
    assert_eq!(r.first().index(), 0);
    assert_eq!(r.last().index(), 3);
    assert_eq!(r.size(), 3);

    let a = [1u8; 4];
    assert_eq!(make_range(&a).size(), 4);
    assert_eq!(make_range(&a[1..]).size(), 3);
    assert_eq!(make_range(3..8).size(), 5);
    assert_eq!(make_range((2, 2)), Range::new(2, 2));
    assert_eq!(make_range(Range::new(1, 4)).into_inner(), (1, 4));
  }

  #[test]
  fn emptiness_test() {
    let empty: Vec<i32> = vec![];
    assert!(make_range(&empty).is_empty());
    assert!(make_range(4..4).is_empty());
    assert!(!make_range(&[0]).is_empty());
    let mut m = [1, 2];
    assert!(!make_range(&mut m).is_empty());

    let stream = make_stream_range::<i32, _>("".as_bytes());
    assert!(stream.is_empty());
    let stream = make_stream_range::<i32, _>("7".as_bytes());
    assert!(!stream.is_empty());
  }

  #[test]
  fn gcollections_emptiness_test() {
    use gcollections::ops::IsEmpty;
    fn through_trait<R: IsEmpty>(r: &R) -> bool {
      r.is_empty()
    }
    assert!(through_trait(&make_range(5u32..5)));
    assert!(!through_trait(&make_range(&[1, 2, 3])));
  }

  #[test]
  fn raw_parts_test() {
    let v = vec![9, 8, 7];
    let r = unsafe { make_range_raw(v.as_ptr(), 2) };
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![9, 8]);

    let mut w = vec![1, 2, 3];
    let r = unsafe { make_range_raw_mut(w.as_mut_ptr(), w.len()) };
    crate::seq::reverse(r);
    assert_eq!(w, vec![3, 2, 1]);
  }

  #[test]
  fn iteration_test() {
    let collected: Vec<i32> = make_range(&[4, 5, 6]).into_iter().collect();
    assert_eq!(collected, vec![4, 5, 6]);
    assert_eq!(make_range(0u8..3).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    let parsed: Vec<f64> = make_stream_range::<f64, _>("1.5 2.5".as_bytes()).iter().collect();
    assert_eq!(parsed, vec![1.5, 2.5]);
  }

  #[test]
  fn serde_tuple_test() {
    let r = Range::new(-3i32, 12);
    assert_tokens(&r, &[
      Token::Tuple { len: 2 },
      Token::I32(-3),
      Token::I32(12),
      Token::TupleEnd
    ]);
  }
}
