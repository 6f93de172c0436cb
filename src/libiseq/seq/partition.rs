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

use crate::algorithm;
use crate::position::*;
use crate::range::Range;

/// Moves the elements satisfying `pred` before the others and returns the first position of the second group. The relative order inside the groups is not kept.
pub fn partition<P, F>(range: Range<P>, pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::partition(first, last, pred)
}

/// Same as [`partition`] but the relative order inside both groups is kept.
pub fn stable_partition<P, F>(range: Range<P>, pred: F) -> P where
  P: MutablePosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::stable_partition(first, last, pred)
}

pub fn partition_copy<P, O1, O2, F>(range: Range<P>, out_true: O1, out_false: O2, pred: F) -> (O1, O2) where
  P: InputPosition,
  P::Item: Clone,
  O1: OutputPosition<P::Item>,
  O2: OutputPosition<P::Item>,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::partition_copy(first, last, out_true, out_false, pred)
}

pub fn is_partitioned<P, F>(range: Range<P>, pred: F) -> bool where
  P: InputPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::is_partitioned(first, last, pred)
}

/// The end of the elements satisfying `pred` in a partitioned range.
pub fn partition_point<P, F>(range: Range<P>, pred: F) -> P where
  P: ForwardPosition,
  F: FnMut(&P::Item) -> bool
{
  let (first, last) = range.into_inner();
  algorithm::partition_point(first, last, pred)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::output::back_inserter;
  use crate::range::make_range;

  #[test]
  fn partitions_test() {
    let cases = vec![
      vec![],
      vec![1],
      vec![2],
      vec![1, 2, 3, 4, 5, 6],
      vec![8, 6, 4, 2],
      vec![7, 4, 7, 4, 1]
    ];
    for data in cases {
      let expected_evens = data.iter().filter(|x| *x % 2 == 0).count();

      let mut v = data.clone();
      let split = partition(make_range(&mut v), |x| x % 2 == 0).index();
      assert_eq!(split, expected_evens, "{:?}", data);
      assert!(is_partitioned(make_range(&v), |x| x % 2 == 0));
      assert_eq!(partition_point(make_range(&v), |x| x % 2 == 0).index(), split);

      let mut w = data.clone();
      let split = stable_partition(make_range(&mut w), |x| x % 2 == 0).index();
      let (mut evens, mut odds) = (vec![], vec![]);
      partition_copy(make_range(&data), back_inserter(&mut evens), back_inserter(&mut odds), |x| x % 2 == 0);
      assert_eq!(&w[..split], &evens[..]);
      assert_eq!(&w[split..], &odds[..]);
    }
  }

  #[test]
  fn partition_checks_test() {
    assert!(is_partitioned(make_range(&Vec::<i32>::new()), |x| *x > 0));
    assert!(is_partitioned(make_range(&[3, 1, -2]), |x| *x > 0));
    assert!(!is_partitioned(make_range(&[3, -1, 2]), |x| *x > 0));
    assert_eq!(partition_point(Range::new(0, 100), |x| x * x < 50), 8);
  }
}
