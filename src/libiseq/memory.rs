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

//! Construction of values into uninitialized memory.
//!
//! The destination is a slice of `MaybeUninit<T>`, such as the spare capacity of a vector. Values written there are never dropped by these functions: the caller takes ownership of the initialized prefix.

use crate::position::InputPosition;
use crate::range::Range;
use std::mem::MaybeUninit;

/// Clones the elements of `range` into the first slots of `dest` and returns how many were written.
///
/// Panics if `dest` is shorter than `range`. The slots written before the panic stay initialized and are leaked.
pub fn uninitialized_copy<P>(range: Range<P>, dest: &mut [MaybeUninit<P::Item>]) -> usize where
  P: InputPosition,
  P::Item: Clone
{
  let (mut first, last) = range.into_inner();
  let mut written = 0;
  while first != last {
    assert!(written < dest.len(), "uninitialized_copy: destination full after {} elements", written);
    dest[written].write(first.item().clone());
    written += 1;
    first.step();
  }
  written
}

/// Initializes every slot of `dest` with a clone of `value` and returns the slice, now initialized.
pub fn uninitialized_fill<'a, T: Clone>(dest: &'a mut [MaybeUninit<T>], value: &T) -> &'a mut [T] {
  for slot in dest.iter_mut() {
    slot.write(value.clone());
  }
  // SAFETY: every slot was written above and `MaybeUninit<T>` has the layout of `T`.
  unsafe { &mut *(dest as *mut [MaybeUninit<T>] as *mut [T]) }
}
