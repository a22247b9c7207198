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

//! This module provides a cache which remembers nothing. Plugged into the
//! top-down solver, it turns the memoized search into a plain exhaustive
//! enumeration of the 2^n subsets.

use crate::{Cache, Selection, State};

/// Dummy implementation of Cache with no information stored at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyCache;
impl EmptyCache {
    pub fn new() -> Self {
        EmptyCache
    }
}

impl Cache for EmptyCache {
    #[inline(always)]
    fn get(&self, _: &State) -> Option<&Selection> {
        None
    }

    #[inline(always)]
    fn insert(&mut self, _: State, _: Selection) {}

    #[inline(always)]
    fn len(&self) -> usize {
        0
    }
}
