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

//! This module checks the properties every selection must satisfy on
//! randomly generated cases (with a fixed seed, so failures are
//! reproducible).

use rand::{rngs::SmallRng, Rng, SeedableRng};

use packer::*;

fn random_case(rng: &mut SmallRng, nb_items: usize, max_weight: Weight, max_value: Value) -> CaseInput {
    let capacity = rng.gen_range(0..=max_weight * 2);
    let items = (0..nb_items)
        .map(|i| Item::new((i + 1).to_string(), rng.gen_range(0..=max_weight), rng.gen_range(0..=max_value)))
        .collect();
    CaseInput::new(capacity, items)
}

fn random_cases(seed: u64, count: usize) -> Vec<CaseInput> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let nb_items = rng.gen_range(0..=12);
            random_case(&mut rng, nb_items, 1_000, 20)
        })
        .collect()
}

#[test]
fn selections_are_consistent_with_the_selected_items() {
    for case in random_cases(1, 200) {
        let best = DefaultSolver::default().solve(&case);
        let selected = case.items().iter()
            .filter(|i| best.ids.contains(&i.id))
            .collect::<Vec<_>>();

        assert_eq!(best.ids.len(), selected.len());
        assert_eq!(best.value, selected.iter().map(|i| i.value).sum::<Value>());
        assert_eq!(best.weight, selected.iter().map(|i| i.weight).sum::<Weight>());
        assert!(best.weight <= case.capacity());
    }
}

#[test]
fn all_solvers_agree() {
    let top_down = TopDownSolver::<SimpleCache>::new();
    let exhaustive = TopDownSolver::<EmptyCache>::new();
    let bottom_up = BottomUpSolver::new();
    for case in random_cases(2, 200) {
        let expected = top_down.solve(&case);
        assert_eq!(expected, exhaustive.solve(&case), "{case:?}");
        assert_eq!(expected, bottom_up.solve(&case), "{case:?}");
    }
}

#[test]
fn the_selection_is_the_lightest_of_the_most_valuable_subsets() {
    for case in random_cases(3, 100) {
        let items = case.items();
        let mut best_value = 0;
        let mut best_weight = 0;
        for mask in 0_u32..(1 << items.len()) {
            let (v, w) = items.iter().enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold((0, 0), |(v, w), (_, item)| (v + item.value, w + item.weight));
            if w <= case.capacity() && (v > best_value || (v == best_value && w < best_weight)) {
                best_value = v;
                best_weight = w;
            }
        }
        let best = DefaultSolver::default().solve(&case);
        assert_eq!(best_value, best.value, "{case:?}");
        assert_eq!(best_weight, best.weight, "{case:?}");
    }
}

#[test]
fn solving_is_idempotent() {
    let solver = DefaultSolver::default();
    for case in random_cases(4, 100) {
        assert_eq!(solver.solve(&case), solver.solve(&case));
    }
}

#[test]
fn more_capacity_never_decreases_the_value() {
    let solver = DefaultSolver::default();
    for case in random_cases(5, 50) {
        let mut previous = Value::MIN;
        for capacity in (0..=case.capacity()).step_by(50) {
            let bigger = CaseInput::new(capacity, case.items().to_vec());
            let value = solver.solve(&bigger).value;
            assert!(value >= previous, "{bigger:?}");
            previous = value;
        }
    }
}

#[test]
fn oversized_items_are_never_selected() {
    let mut rng = SmallRng::seed_from_u64(6);
    for _ in 0..100 {
        let case = random_case(&mut rng, 8, 1_000, 20);
        let best = DefaultSolver::default().solve(&case);
        for item in case.items() {
            if item.weight > case.capacity() {
                assert!(!best.ids.contains(&item.id));
            }
        }
    }
}
