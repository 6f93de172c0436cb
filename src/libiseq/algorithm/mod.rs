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

//! Algorithms on pairs of positions `[first, last)`.
//!
//! Every algorithm takes the positions delimiting its sequences by value and states the position tier it needs as a trait bound. Comparators are strict weak orderings `less(a, b)`; the `_by` variants take the predicate or comparator the plain variants hardwire (`==` or `<`). The [`seq`](../seq/index.html) module exposes the same catalogue on whole [`Range`](../range/struct.Range.html)s.
//!
//! # Examples
//!
//! ```rust
//! use iseq::algorithm::*;
//! use iseq::slice::SlicePosition;
//!
//! let data = [1, 2, 3, 4];
//! let other = [9, 2, 9, 9];
//! let (p1, p2) = find_match(
//!   SlicePosition::new(&data, 0), SlicePosition::new(&data, 4),
//!   SlicePosition::new(&other, 0));
//! assert_eq!((p1.index(), p2.index()), (1, 1));
//! ```

pub mod search;
pub mod modifying;
pub mod partition;
pub mod sorting;
pub mod set_operations;
pub mod heap;
pub mod permutation;
pub mod numeric;
pub mod traversal;

pub use self::search::*;
pub use self::modifying::*;
pub use self::partition::*;
pub use self::sorting::*;
pub use self::set_operations::*;
pub use self::heap::*;
pub use self::permutation::*;
pub use self::numeric::*;
pub use self::traversal::*;
