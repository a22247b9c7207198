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

//! This module provides an iterative implementation of the dynamic program.
//! Instead of recursing from the first item, it fills the (item index,
//! remaining capacity) table from the last item up to the first one. This
//! way, the stack usage does not grow with the number of items.
//!
//! When the dense table would not fit in the memory budget, the states are
//! explored with an explicit stack and only the reachable ones are stored.

use std::mem::size_of;

use fxhash::FxHashMap;
use log::{debug, trace};

use crate::{prefer_take, CaseInput, Item, Selection, Solver, State, Value, Weight};

/// The largest dense table (in bytes) the bottom-up solver allocates.
pub const DEFAULT_TABLE_BUDGET: usize = 1 << 28;

/// What is known about the best selection of one state of the table. The
/// identifiers are not stored in the table: they are recovered afterwards
/// by following the `took` flags from the root state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cell {
    value: Value,
    weight: Weight,
    took: bool,
}
impl Cell {
    /// Decides whether `item` is taken, knowing the best cell of the state
    /// reached when skipping it and (if it fits) when taking it.
    fn decide(item: &Item, skip: Cell, take: Option<Cell>) -> Cell {
        let (take_value, take_weight) = match take {
            None => (item.value.saturating_add(Value::MIN), item.weight),
            Some(sub) => (item.value.saturating_add(sub.value), sub.weight + item.weight),
        };
        if prefer_take(take_value, take_weight, skip.value, skip.weight) {
            Cell { value: take_value, weight: take_weight, took: true }
        } else {
            Cell { took: false, ..skip }
        }
    }
}

/// A dense (item index x remaining capacity) table of cells
struct Table {
    cells: Vec<Cell>,
    width: usize,
}
impl Table {
    /// Allocates the table, unless it would take more than `budget` bytes.
    fn new(width: usize, height: usize, budget: usize) -> Option<Self> {
        let bytes = width.checked_mul(height)?.checked_mul(size_of::<Cell>())?;
        if bytes > budget {
            return None;
        }
        Some(Table { cells: vec![Cell::default(); width * height], width })
    }
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
    fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }
}

/// The bottom-up solver. It yields exactly the same selections as the
/// top-down solver, identifiers order included.
#[derive(Debug, Clone, Copy)]
pub struct BottomUpSolver {
    table_budget: usize,
}
impl Default for BottomUpSolver {
    fn default() -> Self {
        BottomUpSolver { table_budget: DEFAULT_TABLE_BUDGET }
    }
}
impl BottomUpSolver {
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the largest dense table (in bytes) this solver may allocate.
    pub fn with_table_budget(table_budget: usize) -> Self {
        BottomUpSolver { table_budget }
    }
}

impl Solver for BottomUpSolver {
    fn solve(&self, case: &CaseInput) -> Selection {
        if case.capacity() < 0 {
            return Selection::infeasible();
        }
        let items = case.items();
        // any capacity above the total weight behaves like the total weight
        let capacity = case.capacity().min(case.total_weight());
        let dense = usize::try_from(capacity).ok()
            .and_then(|c| c.checked_add(1))
            .and_then(|width| Table::new(width, items.len() + 1, self.table_budget));

        match dense {
            Some(table) => solve_dense(items, capacity, table),
            None => {
                debug!("table too large for {} items and capacity {capacity}, going sparse", items.len());
                solve_sparse(items, capacity)
            }
        }
    }
}

fn solve_dense(items: &[Item], capacity: Weight, mut table: Table) -> Selection {
    for (i, item) in items.iter().enumerate().rev() {
        for r in 0..table.width {
            let skip = table.get(i + 1, r);
            let rest = r as Weight - item.weight;
            let take = (rest >= 0).then(|| table.get(i + 1, rest as usize));
            table.set(i, r, Cell::decide(item, skip, take));
        }
    }
    selection(items, capacity, |i, r| table.get(i, r as usize))
}

fn solve_sparse(items: &[Item], capacity: Weight) -> Selection {
    let mut cells = FxHashMap::<State, Cell>::default();
    let mut stack = vec![State { index: 0, remaining: capacity }];

    while let Some(&state) = stack.last() {
        if cells.contains_key(&state) {
            stack.pop();
            continue;
        }
        let Some(item) = items.get(state.index) else {
            cells.insert(state, Cell::default());
            stack.pop();
            continue;
        };

        let skip_state = State { index: state.index + 1, remaining: state.remaining };
        let rest = state.remaining - item.weight;
        let take_state = (rest >= 0).then_some(State { index: state.index + 1, remaining: rest });

        let skip = cells.get(&skip_state).copied();
        let take = take_state.map(|s| cells.get(&s).copied());
        match (skip, take) {
            (Some(skip), None) => {
                cells.insert(state, Cell::decide(item, skip, None));
                stack.pop();
            }
            (Some(skip), Some(Some(take))) => {
                cells.insert(state, Cell::decide(item, skip, Some(take)));
                stack.pop();
            }
            (skip, take) => {
                if skip.is_none() {
                    stack.push(skip_state);
                }
                if let (Some(None), Some(s)) = (take, take_state) {
                    stack.push(s);
                }
            }
        }
    }
    trace!("sparse table holds {} states", cells.len());
    selection(items, capacity, |i, r| {
        cells.get(&State { index: i, remaining: r }).copied().unwrap_or_default()
    })
}

/// Follows the `took` flags from the root state to recover the identifiers.
fn selection<F: Fn(usize, Weight) -> Cell>(items: &[Item], capacity: Weight, cell: F) -> Selection {
    // the top-down solver appends an id after those of the later items
    let mut ids = vec![];
    let mut r = capacity;
    for (i, item) in items.iter().enumerate() {
        if cell(i, r).took {
            ids.push(item.id.clone());
            r -= item.weight;
        }
    }
    ids.reverse();

    let root = cell(0, capacity);
    Selection { value: root.value, weight: root.weight, ids }
}
