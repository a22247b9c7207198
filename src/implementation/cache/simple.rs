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

//! This module provides the hash-based cache used by default by the
//! top-down solver.

use fxhash::FxHashMap;

use crate::{Cache, Selection, State};

/// Simple implementation of Cache using one single hashmap keyed by the
/// (item index, remaining capacity) pair.
#[derive(Debug, Default, Clone)]
pub struct SimpleCache {
    best_by_state: FxHashMap<State, Selection>,
}
impl SimpleCache {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Cache for SimpleCache {
    fn get(&self, state: &State) -> Option<&Selection> {
        self.best_by_state.get(state)
    }

    fn insert(&mut self, state: State, selection: Selection) {
        self.best_by_state.insert(state, selection);
    }

    fn len(&self) -> usize {
        self.best_by_state.len()
    }
}

#[cfg(test)]
mod test_simple_cache {
    use crate::{Cache, Selection, SimpleCache, State};

    #[test]
    fn it_is_empty_when_created() {
        let cache = SimpleCache::new();
        assert!(cache.is_empty());
        assert_eq!(None, cache.get(&State { index: 0, remaining: 10 }));
    }
    #[test]
    fn it_remembers_what_was_inserted() {
        let mut cache = SimpleCache::new();
        let sel = Selection { value: 3, weight: 200, ids: vec!["7".into()] };
        cache.insert(State { index: 2, remaining: 10 }, sel.clone());

        assert_eq!(1, cache.len());
        assert_eq!(Some(&sel), cache.get(&State { index: 2, remaining: 10 }));
        assert_eq!(None, cache.get(&State { index: 2, remaining: 11 }));
        assert_eq!(None, cache.get(&State { index: 3, remaining: 10 }));
    }
    #[test]
    fn states_are_distinguished_by_index_and_remaining_capacity() {
        let mut cache = SimpleCache::new();
        cache.insert(State { index: 0, remaining: 5 }, Selection::empty());
        cache.insert(State { index: 5, remaining: 0 }, Selection::infeasible());
        assert_eq!(2, cache.len());
        assert_eq!(Some(&Selection::empty()), cache.get(&State { index: 0, remaining: 5 }));
        assert_eq!(Some(&Selection::infeasible()), cache.get(&State { index: 5, remaining: 0 }));
    }
}
