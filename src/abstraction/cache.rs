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

//! This module defines the `Cache` abstraction used to memoize the best
//! selection reachable from a given state.

use crate::{Selection, State};

/// A cache remembers the best selection that has been computed for some
/// state of the decision process so that it never gets computed twice.
///
/// # Note:
/// A cache is only ever meaningful for the case it was filled with. The
/// solvers therefore create a fresh instance for each case they solve and
/// drop it as soon as the case has been solved.
pub trait Cache {
    /// Returns the best selection that was recorded for `state`, if any.
    fn get(&self, state: &State) -> Option<&Selection>;
    /// Records `selection` as the best selection reachable from `state`.
    fn insert(&mut self, state: State, selection: Selection);
    /// The number of states for which a selection is known.
    fn len(&self) -> usize;
    /// True iff no selection is known for any state.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
