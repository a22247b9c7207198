// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Packer
//! Packer solves a very specific flavour of the 0/1 knapsack problem: given
//! a package with a weight limit and a list of candidate items (each having
//! an identifier, a weight and a value), it selects the subset of items
//! with the greatest total value that does not exceed the weight limit.
//! When several subsets share that greatest value, the lightest one wins.
//!
//! ## Input format
//! The input is a text where each line describes one case:
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76)
//! 8 : (1,15.3,€34)
//! ```
//! The weights are decimal numbers with two significant decimals. They are
//! turned into integer hundredths as soon as they are parsed so that all
//! comparisons are exact.
//!
//! ## Quick Example
//! ```
//! # use packer::*;
//! // 1. Parse a case (the second argument is the line index used in errors)
//! let case = parse_case("10 : (1,5.00,€10) (2,3.00,€10)", 0).unwrap();
//! // 2. Pick a solver and solve the case
//! let best = DefaultSolver::default().solve(&case);
//! // 3. Both items are worth the same, but item 2 is lighter
//! assert_eq!(vec!["2"], best.ids);
//! assert_eq!(10, best.value);
//! assert_eq!(300, best.weight);
//! assert_eq!("2", format_selection(&best));
//! ```
//!
//! To process a complete file, use a `Packer` (or the `pack` shortcut):
//! ```no_run
//! # use packer::*;
//! let report = pack("cases.txt").unwrap();
//! println!("{report}");
//! ```

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
