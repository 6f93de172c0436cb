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

//! This library gives the classic sequence algorithms (search, copy, partition, sort, set algebra, heaps, permutations, numeric folds) two calling conventions: on a pair of positions `[first, last)` in [`algorithm`](algorithm/index.html), and on the whole of a sequence through a [`Range`](range/struct.Range.html) in [`seq`](seq/index.html). A few traversals with no classic counterpart are included: agreement search (`find_match`), exclusion search (`find_first_not_of`) and predicate-gated copies (`copy_if`, `copy_until`, `copy_while`).
//!
//! Positions are described by a hierarchy of traits in [`position`](position/index.html), from single-pass input positions to random-access ones; every algorithm asks for the weakest tier it needs. Slices, vectors, arrays, integers and whitespace-separated streams provide positions out of the box.
//!
//! # Examples
//!
//! ```rust
//! use iseq::make_range;
//! use iseq::output::back_inserter;
//! use iseq::seq;
//!
//! let mut scores = vec![12, 7, 19, 7, 3];
//! seq::stable_sort(make_range(&mut scores));
//! assert!(seq::binary_search(make_range(&scores), &19));
//!
//! let mut passing = vec![];
//! seq::copy_until(make_range(&scores), back_inserter(&mut passing), |s| *s > 10);
//! assert_eq!(passing, [3, 7, 7]);
//! ```
//!
//! # References
//! * [Ranges (N1871)](http://www.open-std.org/jtc1/sc22/wg21/docs/papers/2005/n1871.html)
//! * [Elements of Programming](http://elementsofprogramming.com/)

pub mod position;
pub mod slice;
pub mod output;
pub mod stream;
pub mod range;
pub mod algorithm;
pub mod seq;
pub mod contract;
pub mod stash;
pub mod memory;

pub use crate::position::{
  BidirectionalPosition, ForwardPosition, InputPosition, MutablePosition,
  OutputPosition, RandomAccessPosition
};
pub use crate::range::{make_range, make_range_raw, make_range_raw_mut, make_stream_range, Range, ToRange};
