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

//! This module provides the implementation of the memoized top-down solver.
//! It explores the decision process recursively, starting from the first
//! item and the full capacity, and remembers the best selection of each
//! (item index, remaining capacity) state it has resolved.

use std::marker::PhantomData;

use log::trace;

use crate::{Cache, CaseInput, Item, Selection, SimpleCache, Solver, State};

/// The memoized recursive solver. The type parameter `C` is the kind of
/// cache it uses; a brand new instance of it is created for each case.
///
/// # Example
/// ```
/// # use packer::*;
/// let case = CaseInput::new(1000, vec![
///     Item::new("1", 500, 10),
///     Item::new("2", 300, 10),
/// ]);
/// let best = TopDownSolver::<SimpleCache>::new().solve(&case);
/// assert_eq!(vec!["2"], best.ids);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TopDownSolver<C = SimpleCache> {
    _phantom: PhantomData<fn() -> C>,
}
impl<C> Default for TopDownSolver<C> {
    fn default() -> Self {
        TopDownSolver { _phantom: PhantomData }
    }
}
impl<C> TopDownSolver<C> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<C: Cache + Default> Solver for TopDownSolver<C> {
    fn solve(&self, case: &CaseInput) -> Selection {
        let mut cache = C::default();
        let best = fit(case.items(), State { index: 0, remaining: case.capacity() }, &mut cache);
        trace!("top-down: {} states memoized for {} items", cache.len(), case.items().len());
        best
    }
}

/// Returns the best selection among the items `state.index..` given that
/// only `state.remaining` capacity is left.
fn fit<C: Cache>(items: &[Item], state: State, cache: &mut C) -> Selection {
    if state.remaining < 0 {
        return Selection::infeasible();
    }
    if state.index == items.len() {
        return Selection::empty();
    }
    if let Some(best) = cache.get(&state) {
        return best.clone();
    }

    let item = &items[state.index];
    let take = fit(items, State { index: state.index + 1, remaining: state.remaining - item.weight }, cache)
        .with(item);
    let skip = fit(items, State { index: state.index + 1, remaining: state.remaining }, cache);

    let best = Selection::best_of(take, skip);
    cache.insert(state, best.clone());
    best
}
