// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn side(runs: &[DiffRun], skip: TokenChange) -> String {
    runs.iter().filter(|r| r.change != skip).map(|r| r.text.as_str()).collect()
}

// ---------------------------------------------------------------------------
// unified
// ---------------------------------------------------------------------------

#[test]
fn unified_identical_is_one_equal_run() {
    let runs = unified("hello world\n", "hello world\n");
    assert_eq!(runs, vec![DiffRun { change: TokenChange::Equal, text: "hello world\n".to_string() }]);
}

#[test]
fn unified_marks_replaced_word() {
    let runs = unified("version 1.0 ready", "version 2.0 ready");
    assert!(runs.iter().any(|r| r.change == TokenChange::Delete && r.text.contains("1.0")));
    assert!(runs.iter().any(|r| r.change == TokenChange::Insert && r.text.contains("2.0")));
    assert_eq!(runs.first().map(|r| r.change), Some(TokenChange::Equal));
    assert_eq!(runs.last().map(|r| r.change), Some(TokenChange::Equal));
}

#[test]
fn unified_runs_never_repeat_a_kind() {
    let runs = unified("a b c d e", "a x y d z");
    for pair in runs.windows(2) {
        assert_ne!(pair[0].change, pair[1].change);
    }
}

proptest! {
    #[test]
    fn unified_reconstructs_both_sides(left in "[a-c \n]{0,24}", right in "[a-c \n]{0,24}") {
        let runs = unified(&left, &right);
        prop_assert_eq!(side(&runs, TokenChange::Insert), left);
        prop_assert_eq!(side(&runs, TokenChange::Delete), right);
    }

    #[test]
    fn identical_inputs_have_no_marks(text in "[a-z0-9 \n]{0,64}") {
        prop_assert!(unified(&text, &text).iter().all(|r| r.change == TokenChange::Equal));
        prop_assert!(align_lines(&text, &text).iter().all(|row| !row.is_marked()));
    }
}

// ---------------------------------------------------------------------------
// align_lines
// ---------------------------------------------------------------------------

#[test]
fn middle_line_change_is_marked_changed() {
    let rows = align_lines("alpha\nbeta\ngamma", "alpha\nBETA\ngamma");
    let marks: Vec<LineMark> = rows.iter().map(|r| r.mark).collect();
    assert_eq!(marks, vec![LineMark::Same, LineMark::Changed, LineMark::Same]);
    assert_eq!(rows[1].left, "beta");
    assert_eq!(rows[1].right, "BETA");
}

#[test]
fn shorter_side_pads_with_empty_lines() {
    let rows = align_lines("one\ntwo\nthree", "one");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].mark, LineMark::Removed);
    assert_eq!(rows[2].mark, LineMark::Removed);
    assert_eq!(rows[2].right, "");

    let rows = align_lines("one", "one\ntwo");
    assert_eq!(rows[1].mark, LineMark::Added);
}

#[test]
fn empty_inputs_align_to_one_blank_row() {
    let rows = align_lines("", "");
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].is_marked());
}

#[parameterized(
    same = { LineMark::Same, " " },
    changed = { LineMark::Changed, "~" },
    removed = { LineMark::Removed, "-" },
    added = { LineMark::Added, "+" },
)]
fn line_mark_symbols(mark: LineMark, symbol: &str) {
    assert_eq!(mark.to_string(), symbol);
}
