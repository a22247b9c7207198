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

//! This module is meant to test the behavior of the packer on complete
//! input files.

use std::path::PathBuf;

use packer::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("resources/packer/")
        .join(id)
}

fn pack_id(id: &str) -> Result<String, Error> {
    pack(locate(id))
}

fn error_of(id: &str) -> Error {
    match pack_id(id) {
        Ok(report) => panic!("{id} should have been rejected, got {report:?}"),
        Err(e) => e,
    }
}

#[test]
fn valid_test_cases_yield_one_line_per_case() {
    let report = pack_id("valid_test_cases").unwrap();
    let lines = report.split('\n').collect::<Vec<_>>();
    assert_eq!(4, lines.len());
}
#[test]
fn valid_test_cases_case_1() {
    assert_eq!("4", pack_id("valid_test_cases").unwrap().split('\n').next().unwrap());
}
#[test]
fn valid_test_cases_case_2_packs_nothing() {
    assert_eq!("-", pack_id("valid_test_cases").unwrap().split('\n').nth(1).unwrap());
}
#[test]
fn valid_test_cases_case_3() {
    assert_eq!("7,2", pack_id("valid_test_cases").unwrap().split('\n').nth(2).unwrap());
}
#[test]
fn valid_test_cases_case_4_prefers_the_lighter_of_two_equal_prices() {
    assert_eq!("9,8", pack_id("valid_test_cases").unwrap().split('\n').nth(3).unwrap());
}
#[test]
fn more_than_one_package_with_the_same_price() {
    assert_eq!("6,5,4", pack_id("more_than_one_package_with_the_same_price").unwrap());
}
#[test]
fn no_items_fit_in_the_pack() {
    assert_eq!("-", pack_id("no_items_fit_in_the_pack").unwrap());
}
#[test]
fn empty_file() {
    let e = error_of("empty_file");
    assert_eq!(ErrorKind::EmptyInput, e.kind());
    assert_eq!("The file is empty.", e.to_string());
}
#[test]
fn blank_file() {
    assert_eq!(ErrorKind::EmptyInput, error_of("blank_file").kind());
}
#[test]
fn no_pack_size() {
    let e = error_of("no_pack_size");
    assert_eq!(ErrorKind::InvalidCapacity, e.kind());
    assert_eq!("Incorrect parameters: could not parse a pack size in the line 0", e.to_string());
}
#[test]
fn no_colon() {
    let e = error_of("no_colon");
    assert_eq!(ErrorKind::MissingDelimiter, e.kind());
    assert_eq!("Incorrect parameters: there is no colon in the line 0", e.to_string());
}
#[test]
fn no_items() {
    let e = error_of("no_items");
    assert_eq!(ErrorKind::MissingItemsField, e.kind());
    assert_eq!("Incorrect parameters: there is no items to pack in the line 0", e.to_string());
}
#[test]
fn invalid_items_to_pack() {
    let e = error_of("invalid_items_to_pack");
    assert_eq!(ErrorKind::MalformedItem, e.kind());
    assert_eq!(Some("1"), e.token());
    assert_eq!("Incorrect parameters in the line 0: Item [1] has the wrong format.", e.to_string());
}
#[test]
fn invalid_item_on_second_line() {
    let e = error_of("invalid_item_on_second_line");
    assert_eq!(Some(1), e.line());
    assert_eq!("Incorrect parameters in the line 1: Item [2,x,€3] has the wrong format.", e.to_string());
}
#[test]
fn missing_file() {
    let e = error_of("this_file_does_not_exist");
    assert_eq!(ErrorKind::Io, e.kind());
    assert_eq!(None, e.line());
}
#[test]
fn every_strategy_produces_the_same_report() {
    let expected = pack_id("valid_test_cases").unwrap();
    for strategy in [Strategy::TopDown, Strategy::BottomUp, Strategy::Exhaustive] {
        let config = PackerConfigBuilder::default()
            .strategy(strategy)
            .threads(2)
            .build()
            .unwrap();
        let report = Packer::new(config).pack_file(locate("valid_test_cases")).unwrap();
        assert_eq!(expected, report, "{strategy}");
    }
}
