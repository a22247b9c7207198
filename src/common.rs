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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

/// Weights and capacities are expressed in hundredths of the real unit
/// (a weight of `53.38` is stored as `5338`). They are signed because the
/// remaining capacity of a sub-state may become negative during the search.
pub type Weight = i64;
/// The value (price) of an item or of a selection.
pub type Value = i64;

/// The factor by which a decimal weight is multiplied to obtain its
/// fixed-point representation.
pub const SCALE: Weight = 100;

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One of the things that may be put into the package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// The label of this item, as it appears in the input
    pub id: String,
    /// The weight of this item, in hundredths
    pub weight: Weight,
    /// The value of this item
    pub value: Value,
}
impl Item {
    pub fn new<S: Into<String>>(id: S, weight: Weight, value: Value) -> Self {
        Item { id: id.into(), weight, value }
    }
}

// ----------------------------------------------------------------------------
// --- CASE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A case is one instance of the packing problem: a weight limit and the
/// ordered list of candidate items. The order of the items matters: it is
/// the order in which the solvers decide to take or skip them, hence it
/// determines the order of the identifiers in the resulting selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInput {
    capacity: Weight,
    items: Vec<Item>,
}
impl CaseInput {
    pub fn new(capacity: Weight, items: Vec<Item>) -> Self {
        CaseInput { capacity, items }
    }
    /// The maximum total weight of the package (in hundredths)
    pub fn capacity(&self) -> Weight {
        self.capacity
    }
    /// The candidate items, in input order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// The sum of the weights of all candidate items (saturates at
    /// `Weight::MAX`)
    pub fn total_weight(&self) -> Weight {
        self.items.iter().fold(0, |total: Weight, i| total.saturating_add(i.weight))
    }
}

// ----------------------------------------------------------------------------
// --- STATE ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The state of the decision process: the index of the next item to decide
/// upon, and the capacity that is still available at that point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub index: usize,
    pub remaining: Weight,
}

// ----------------------------------------------------------------------------
// --- SELECTION --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of the resolution of a case (or of a sub-state thereof).
///
/// # Note:
/// The identifiers are listed in the order they were discovered by the
/// solver: the id of item `i` is appended *after* the ids of the items that
/// were selected among the items `i+1..n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    /// The total value of the selected items
    pub value: Value,
    /// The total weight of the selected items (in hundredths)
    pub weight: Weight,
    /// The identifiers of the selected items
    pub ids: Vec<String>,
}
impl Selection {
    /// The selection of a sub-state where no item is left to decide upon
    pub fn empty() -> Self {
        Selection { value: 0, weight: 0, ids: vec![] }
    }
    /// The selection of an over-capacity sub-state. Its value loses every
    /// comparison against a feasible selection.
    pub fn infeasible() -> Self {
        Selection { value: Value::MIN, weight: 0, ids: vec![] }
    }
    pub fn is_feasible(&self) -> bool {
        self.value != Value::MIN
    }
    /// True iff no item has been selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
    /// Extends this (sub-)selection with the given item.
    pub fn with(mut self, item: &Item) -> Self {
        self.value = item.value.saturating_add(self.value);
        self.weight += item.weight;
        self.ids.push(item.id.clone());
        self
    }
    /// Returns the best of the two selections resulting from the choice to
    /// take or skip an item.
    pub fn best_of(take: Selection, skip: Selection) -> Selection {
        if prefer_take(take.value, take.weight, skip.value, skip.weight) {
            take
        } else {
            skip
        }
    }
}

/// The tie-break rule shared by all solvers: the greatest value wins; on
/// equal values, the strictly lighter wins. An exact (value, weight) tie
/// goes to `skip`.
#[inline]
pub fn prefer_take(take_value: Value, take_weight: Weight, skip_value: Value, skip_weight: Weight) -> bool {
    if take_value == skip_value {
        take_weight < skip_weight
    } else {
        take_value > skip_value
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
