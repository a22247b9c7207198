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

//! This module provides the solver implementations.
mod top_down;
mod bottom_up;

pub use top_down::*;
pub use bottom_up::*;

use std::{fmt, str::FromStr};

use crate::{CaseInput, EmptyCache, Selection, SimpleCache, Solver};

/// Above this number of items, the default solver stops recursing (one
/// stack frame per item) and fills the table iteratively instead.
pub const DEFAULT_RECURSION_LIMIT: usize = 1024;

/// The name of the solver implementations that are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Top-down when the case is small enough, bottom-up otherwise
    #[default]
    Auto,
    /// Memoized recursion
    TopDown,
    /// Iterative table fill
    BottomUp,
    /// Recursion without any memoization
    Exhaustive,
}
impl Strategy {
    /// Instantiates the solver implementing this strategy.
    pub fn solver(self, recursion_limit: usize) -> Box<dyn Solver + Send + Sync> {
        match self {
            Strategy::Auto       => Box::new(DefaultSolver::new(recursion_limit)),
            Strategy::TopDown    => Box::new(TopDownSolver::<SimpleCache>::new()),
            Strategy::BottomUp   => Box::new(BottomUpSolver::new()),
            Strategy::Exhaustive => Box::new(TopDownSolver::<EmptyCache>::new()),
        }
    }
}
impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Auto       => "auto",
            Strategy::TopDown    => "top-down",
            Strategy::BottomUp   => "bottom-up",
            Strategy::Exhaustive => "exhaustive",
        };
        f.write_str(name)
    }
}
impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto"       => Ok(Strategy::Auto),
            "top-down"   => Ok(Strategy::TopDown),
            "bottom-up"  => Ok(Strategy::BottomUp),
            "exhaustive" => Ok(Strategy::Exhaustive),
            _ => Err(format!("unknown strategy '{s}' (expected auto, top-down, bottom-up or exhaustive)")),
        }
    }
}

/// The solver that should be used by default: memoized recursion for the
/// cases having at most `recursion_limit` items, iterative table fill for
/// the larger ones. Both yield the very same selections.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSolver {
    recursion_limit: usize,
}
impl Default for DefaultSolver {
    fn default() -> Self {
        DefaultSolver { recursion_limit: DEFAULT_RECURSION_LIMIT }
    }
}
impl DefaultSolver {
    pub fn new(recursion_limit: usize) -> Self {
        DefaultSolver { recursion_limit }
    }
}
impl Solver for DefaultSolver {
    fn solve(&self, case: &CaseInput) -> Selection {
        if case.items().len() <= self.recursion_limit {
            TopDownSolver::<SimpleCache>::new().solve(case)
        } else {
            BottomUpSolver::new().solve(case)
        }
    }
}
