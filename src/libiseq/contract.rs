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

//! Assertions whose failure the caller decides how to handle.
//!
//! Algorithms never validate their arguments. Code that wants a violated precondition to be reported instead of panicking deep inside an algorithm checks it first with these functions. A failed check is logged at debug level and handed back to the caller: as an error value ([`check`], [`check_with`]) or through a hook ([`check_or_else`]).
//!
//! ```rust
//! use iseq::contract::{check, check_range};
//! use iseq::{make_range, Range};
//!
//! let v = vec![1, 2, 3];
//! assert!(check_range(&make_range(&v)).is_ok());
//! assert!(check_range(&Range::new(5, 2)).is_err());
//! assert_eq!(check(v.len() > 5, "at least five elements").unwrap_err().what(), "at least five elements");
//! ```

use crate::position::RandomAccessPosition;
use crate::range::Range;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contract violation: {what}")]
pub struct ContractViolation
{
  what: String
}

impl ContractViolation
{
  pub fn new<S: Into<String>>(what: S) -> ContractViolation {
    ContractViolation {
      what: what.into()
    }
  }

  /// Description of the assertion that does not hold.
  pub fn what(&self) -> &str {
    &self.what
  }
}

pub fn check(assertion: bool, what: &str) -> Result<(), ContractViolation> {
  check_with(assertion, || ContractViolation::new(what))
}

/// Fails with the error built by `failure` when `assertion` is false. The error is returned as is.
pub fn check_with<E, F>(assertion: bool, failure: F) -> Result<(), E> where
  E: Display,
  F: FnOnce() -> E
{
  if assertion {
    Ok(())
  }
  else {
    let error = failure();
    tracing::debug!("{}", error);
    Err(error)
  }
}

/// Calls `hook` when `assertion` is false and returns `assertion`. The hook may panic or abort the process.
pub fn check_or_else<F>(assertion: bool, hook: F) -> bool where
  F: FnOnce()
{
  if !assertion {
    tracing::debug!("assertion failed, running the failure hook");
    hook();
  }
  assertion
}

/// Checks that the last position of `range` is reachable from its first one.
pub fn check_range<P>(range: &Range<P>) -> Result<(), ContractViolation> where
  P: RandomAccessPosition
{
  let length = range.first().distance_to(range.last());
  check_with(length >= 0, || ContractViolation::new(
    format!("the end of the range lies {} positions before its beginning", -length)))
}
