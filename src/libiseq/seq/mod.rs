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

//! Algorithms on whole ranges.
//!
//! Each function takes the [`Range`](../range/struct.Range.html) of the sequence it works on in place of the pair of positions taken by its counterpart in [`algorithm`](../algorithm/index.html), and forwards to it: semantics, complexity and the position tier required are the same. When an algorithm reads a second sequence, that sequence is a second `Range` if the position-pair algorithm bounds it, or a single starting position if it only assumes it is long enough (`transform_binary`, `inner_product`, `swap_ranges`, `find_match`). A position inside the range (`rotate`, `partial_sort`, `nth_element`, `inplace_merge`) is passed after it.
//!
//! # Examples
//!
//! ```rust
//! use iseq::make_range;
//! use iseq::output::back_inserter;
//! use iseq::seq;
//!
//! let words = vec!["pear", "fig", "apple", "kiwi"];
//! let mut short: Vec<&str> = vec![];
//! seq::copy_if(make_range(&words), back_inserter(&mut short), |w| w.len() <= 4);
//! seq::sort(make_range(&mut short));
//! assert_eq!(short, ["fig", "kiwi", "pear"]);
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
