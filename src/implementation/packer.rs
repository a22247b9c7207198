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

//! This module provides the `Packer`: the piece which puts everything
//! together. It reads an input file, parses all of its cases, solves each
//! of them (possibly on several threads) and renders the report.

use std::{path::Path, time::Instant};

use derive_builder::Builder;
use log::{debug, info};
use parking_lot::Mutex;

use crate::{format_selection, parse_input, read_input, CaseInput, Error, Selection, Solver, Strategy, DEFAULT_RECURSION_LIMIT};

/// The knobs of a packer.
///
/// # Example
/// ```
/// # use packer::*;
/// let config = PackerConfigBuilder::default()
///     .strategy(Strategy::BottomUp)
///     .threads(2)
///     .build()
///     .unwrap();
/// assert_eq!(Strategy::BottomUp, config.strategy());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PackerConfig {
    /// Which solver implementation to use
    #[builder(default)]
    strategy: Strategy,
    /// The number of items above which the `Auto` strategy stops recursing
    #[builder(default = "DEFAULT_RECURSION_LIMIT")]
    recursion_limit: usize,
    /// The number of threads solving the cases of a batch concurrently.
    /// By default, it amounts to the number of hardware threads.
    #[builder(default = "num_cpus::get()")]
    threads: usize,
}
impl PackerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.threads {
            Some(0) => Err("the number of threads must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}
impl Default for PackerConfig {
    fn default() -> Self {
        PackerConfig {
            strategy: Strategy::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            threads: num_cpus::get(),
        }
    }
}
impl PackerConfig {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }
    pub fn threads(&self) -> usize {
        self.threads
    }
}

/// Solves batches of cases.
///
/// # Example
/// ```
/// # use packer::*;
/// let packer = Packer::default();
/// let report = packer.pack_str("8 : (1,15.3,€34)\n10 : (1,5.00,€10) (2,3.00,€10)").unwrap();
/// assert_eq!("-\n2", report);
/// ```
pub struct Packer {
    config: PackerConfig,
    solver: Box<dyn Solver + Send + Sync>,
}
impl Default for Packer {
    fn default() -> Self {
        Self::new(PackerConfig::default())
    }
}
impl Packer {
    pub fn new(config: PackerConfig) -> Self {
        let solver = config.strategy.solver(config.recursion_limit);
        Packer { config, solver }
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Reads the given file and returns the report listing the best
    /// selection of each of its cases (one line per case).
    pub fn pack_file<P: AsRef<Path>>(&self, fname: P) -> Result<String, Error> {
        let text = read_input(fname)?;
        self.pack_str(&text)
    }

    /// Parses the given text and returns the report listing the best
    /// selection of each of its cases (one line per case). Nothing gets
    /// solved if any of the lines is ill formed.
    pub fn pack_str(&self, text: &str) -> Result<String, Error> {
        let cases = parse_input(text)?;

        let start = Instant::now();
        let selections = self.solve_all(&cases);
        info!("solved {} cases in {:.3} seconds ({} strategy)",
            cases.len(), start.elapsed().as_secs_f32(), self.config.strategy);

        Ok(selections.iter()
            .map(format_selection)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Solves all the given cases and returns their selections in the same
    /// order. The cases are independent from one another; each solve uses
    /// its own cache, which makes it safe to dispatch them over a pool of
    /// `threads` workers.
    pub fn solve_all(&self, cases: &[CaseInput]) -> Vec<Selection> {
        let nb_threads = self.config.threads.min(cases.len()).max(1);
        if nb_threads == 1 {
            return cases.iter().enumerate()
                .map(|(i, case)| self.solve_one(i, case))
                .collect();
        }

        let next = Mutex::new(0_usize);
        let results = Mutex::new(vec![None; cases.len()]);
        std::thread::scope(|s| {
            for _ in 0..nb_threads {
                s.spawn(|| loop {
                    let index = {
                        let mut next = next.lock();
                        let index = *next;
                        *next += 1;
                        index
                    };
                    let Some(case) = cases.get(index) else {
                        break;
                    };
                    let selection = self.solve_one(index, case);
                    results.lock()[index] = Some(selection);
                });
            }
        });

        results.into_inner().into_iter().flatten().collect()
    }

    fn solve_one(&self, index: usize, case: &CaseInput) -> Selection {
        let selection = self.solver.solve(case);
        debug!("case {}: {} items, capacity {} -> value {}, weight {}, ids {:?}",
            index, case.items().len(), case.capacity(),
            selection.value, selection.weight, selection.ids);
        selection
    }
}

/// Reads the given file and solves all of its cases with the default
/// configuration.
pub fn pack<P: AsRef<Path>>(fname: P) -> Result<String, Error> {
    Packer::default().pack_file(fname)
}

#[cfg(test)]
mod test_packer {
    use crate::{CaseInput, ErrorKind, Item, Packer, PackerConfigBuilder, Strategy};

    const SAMPLE: &str = "\
81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)
8 : (1,15.3,€34)
75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)
56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)
";

    fn packer(strategy: Strategy, threads: usize) -> Packer {
        Packer::new(PackerConfigBuilder::default()
            .strategy(strategy)
            .threads(threads)
            .build()
            .unwrap())
    }

    #[test]
    fn the_sample_yields_one_line_per_case() {
        let report = packer(Strategy::Auto, 1).pack_str(SAMPLE).unwrap();
        assert_eq!("4\n-\n7,2\n9,8", report);
    }
    #[test]
    fn the_report_does_not_depend_on_the_number_of_threads() {
        let sequential = packer(Strategy::Auto, 1).pack_str(SAMPLE).unwrap();
        for threads in [2, 3, 8] {
            assert_eq!(sequential, packer(Strategy::Auto, threads).pack_str(SAMPLE).unwrap());
        }
    }
    #[test]
    fn the_report_does_not_depend_on_the_strategy() {
        let expected = packer(Strategy::TopDown, 1).pack_str(SAMPLE).unwrap();
        for strategy in [Strategy::Auto, Strategy::BottomUp, Strategy::Exhaustive] {
            assert_eq!(expected, packer(strategy, 2).pack_str(SAMPLE).unwrap());
        }
    }
    #[test]
    fn one_bad_line_fails_the_whole_batch() {
        let text = format!("{SAMPLE}10 : (1)\n");
        let err = packer(Strategy::Auto, 4).pack_str(&text).unwrap_err();
        assert_eq!(ErrorKind::MalformedItem, err.kind());
        assert_eq!(Some(4), err.line());
    }
    #[test]
    fn solve_all_preserves_the_order_of_the_cases() {
        let cases = (0..20)
            .map(|i| CaseInput::new(i * 100, vec![Item::new(i.to_string(), i * 100, 1)]))
            .collect::<Vec<_>>();
        let selections = packer(Strategy::Auto, 4).solve_all(&cases);
        assert_eq!(20, selections.len());
        for (i, sel) in selections.iter().enumerate() {
            assert_eq!(vec![i.to_string()], sel.ids);
        }
    }
    #[test]
    fn many_items_with_a_large_capacity_are_solved_without_a_dense_table() {
        let items = (1..=1025).map(|i| format!("({i},100.00,€1)")).collect::<Vec<_>>();
        let text = format!("100000 : {}", items.join(" "));
        let report = Packer::default().pack_str(&text).unwrap();

        // any 1000 items are worth the same: on ties the earlier ones are skipped
        let expected = (26..=1025).rev().map(|i| i.to_string()).collect::<Vec<_>>();
        assert_eq!(expected.join(","), report);
    }
    #[test]
    fn a_huge_capacity_is_solved_bottom_up() {
        let report = packer(Strategy::BottomUp, 1)
            .pack_str("1000000000000 : (1,1000000000000,€1) (2,1,€1)")
            .unwrap();
        assert_eq!("2", report);
    }
    #[test]
    fn solve_all_accepts_an_empty_batch() {
        assert!(packer(Strategy::Auto, 4).solve_all(&[]).is_empty());
    }
    #[test]
    fn zero_threads_is_not_a_valid_configuration() {
        assert!(PackerConfigBuilder::default().threads(0).build().is_err());
    }
    #[test]
    fn default_configuration() {
        let config = PackerConfigBuilder::default().build().unwrap();
        assert_eq!(Strategy::Auto, config.strategy());
        assert_eq!(crate::DEFAULT_RECURSION_LIMIT, config.recursion_limit());
        assert!(config.threads() >= 1);
    }
}
