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

//! Scoped changes to a variable.
//!
//! A `Stash` borrows a variable, remembers its value and puts that value back when it goes out of scope, whatever happened to the variable meanwhile. Changes are made through the stash itself, which dereferences to the variable.
//!
//! ```rust
//! use iseq::stash::Stash;
//!
//! let mut depth = 0;
//! {
//!   let mut scoped = Stash::new(&mut depth);
//!   *scoped += 3;
//!   assert_eq!(*scoped, 3);
//! }
//! assert_eq!(depth, 0);
//! ```

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

pub struct Stash<'a, T>
{
  hold: &'a mut T,
  original: T
}

impl<'a, T: Clone> Stash<'a, T>
{
  pub fn new(hold: &'a mut T) -> Stash<'a, T> {
    let original = hold.clone();
    Stash {
      hold,
      original
    }
  }
}

impl<'a, T> Stash<'a, T>
{
  /// The value the variable gets back on drop.
  pub fn original(&self) -> &T {
    &self.original
  }
}

impl<'a, T> Deref for Stash<'a, T>
{
  type Target = T;

  fn deref(&self) -> &T {
    &*self.hold
  }
}

impl<'a, T> DerefMut for Stash<'a, T>
{
  fn deref_mut(&mut self) -> &mut T {
    &mut *self.hold
  }
}

impl<'a, T> Drop for Stash<'a, T>
{
  fn drop(&mut self) {
    mem::swap(self.hold, &mut self.original);
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Stash<'a, T>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Stash")
      .field("current", &*self.hold)
      .field("original", &self.original)
      .finish()
  }
}
