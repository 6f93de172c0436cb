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

//! Input positions over a stream of whitespace-separated values.
//!
//! The first position of a stream range owns the reader and the value parsed last; the last position is the end marker. The range ends at the end of the input or at the first token that does not parse, whichever comes first. In the second case the failure stays available on the position through [`StreamPosition::failure`]. Most algorithms consume the input position and do not give it back, so take a [`StreamFailure`] handle with [`StreamPosition::watch_failure`] beforehand to observe the failure afterwards.
//!
//! ```rust
//! use iseq::make_stream_range;
//! use iseq::seq;
//!
//! let input = "3 4 5 x 6".as_bytes();
//! let range = make_stream_range::<i32, _>(input);
//! let failure = range.first().watch_failure();
//! assert_eq!(seq::accumulate(range, 0), 12);
//! assert!(failure.get().is_some());
//! ```

use crate::position::InputPosition;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
  #[error("cannot read the stream")]
  Io(#[from] io::Error),
  #[error("cannot parse `{token}` as {type_name}: {reason}")]
  Parse {
    token: String,
    type_name: &'static str,
    reason: String
  }
}

/// The failure that ended a stream range, shared with the position that read it.
#[derive(Debug, Clone, Default)]
pub struct StreamFailure(Arc<OnceLock<StreamError>>);

impl StreamFailure
{
  pub fn get(&self) -> Option<&StreamError> {
    self.0.get()
  }
}

pub struct StreamPosition<T, R>
{
  reader: Option<R>,
  current: Option<T>,
  failure: StreamFailure
}

impl<T, R> StreamPosition<T, R> where
  T: FromStr,
  T::Err: fmt::Display,
  R: BufRead
{
  /// Position on the first value of `reader`, or the end marker if there is none.
  pub fn new(reader: R) -> StreamPosition<T, R> {
    let mut position = StreamPosition {
      reader: Some(reader),
      current: None,
      failure: StreamFailure::default()
    };
    position.read_next();
    position
  }

  fn read_next(&mut self) {
    self.current = None;
    let result = match self.reader.as_mut() {
      Some(reader) => next_token(reader),
      None => return
    };
    match result {
      Ok(Some(token)) => match token.parse::<T>() {
        Ok(value) => self.current = Some(value),
        Err(reason) => self.fail(StreamError::Parse {
          reason: reason.to_string(),
          token,
          type_name: std::any::type_name::<T>()
        })
      },
      Ok(None) => self.reader = None,
      Err(e) => self.fail(StreamError::Io(e))
    }
  }

  fn fail(&mut self, failure: StreamError) {
    tracing::debug!("stream range ends early: {}", failure);
    self.reader = None;
    // A position fails at most once: the reader is gone afterwards.
    let _ = self.failure.0.set(failure);
  }
}

impl<T, R> StreamPosition<T, R>
{
  pub fn end() -> StreamPosition<T, R> {
    StreamPosition {
      reader: None,
      current: None,
      failure: StreamFailure::default()
    }
  }

  pub fn is_end(&self) -> bool {
    self.current.is_none()
  }

  /// Why the range ended before the end of the input, if it did.
  ///
  /// Only reachable while the caller still holds this position, e.g. the one returned by `find_if`. Algorithms such as `accumulate`, `copy` or `count` drop it; use [`watch_failure`](Self::watch_failure) for those.
  pub fn failure(&self) -> Option<&StreamError> {
    self.failure.get()
  }

  /// A handle that reports the failure of this position and of the positions it steps into.
  pub fn watch_failure(&self) -> StreamFailure {
    self.failure.clone()
  }

  /// The reader, positioned after the last consumed token; `None` once the range has ended.
  pub fn into_reader(self) -> Option<R> {
    self.reader
  }
}

/// Two positions are equal when both are live or both are at the end, like positions sharing one stream.
impl<T, R> PartialEq for StreamPosition<T, R>
{
  fn eq(&self, other: &Self) -> bool {
    self.is_end() == other.is_end()
  }
}

impl<T: fmt::Debug, R> fmt::Debug for StreamPosition<T, R>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StreamPosition")
      .field("current", &self.current)
      .field("failure", &self.failure.get())
      .finish()
  }
}

impl<T, R> InputPosition for StreamPosition<T, R> where
  T: FromStr,
  T::Err: fmt::Display,
  R: BufRead
{
  type Item = T;

  fn item(&self) -> &T {
    match self.current {
      Some(ref value) => value,
      None => panic!("Cannot read the end position of a stream.")
    }
  }

  fn step(&mut self) {
    self.read_next();
  }
}

fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
  let mut token = Vec::new();
  loop {
    let buffer = reader.fill_buf()?;
    if buffer.is_empty() {
      break;
    }
    let mut used = 0;
    let mut complete = false;
    for &byte in buffer {
      used += 1;
      if byte.is_ascii_whitespace() {
        if !token.is_empty() {
          complete = true;
          break;
        }
      }
      else {
        token.push(byte);
      }
    }
    reader.consume(used);
    if complete {
      break;
    }
  }
  if token.is_empty() {
    Ok(None)
  }
  else {
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
  }
}
