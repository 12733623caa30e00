//! Cursor invariant over random operation sequences

use proptest::prelude::*;

use crate::people;
use gridwriter::{ChartSeries, DocumentError, ExportError, SheetWriter};

#[derive(Debug, Clone)]
enum Op {
    SkipRows(i32),
    SkipColumns(i32),
    NewRow,
    ResetColumn,
    ResetRow,
    RowOffset(i64),
    ColumnOffset(i64),
    Text(i32, i32),
    Table(bool),
    Chart(u32),
    NewSheet,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3..6i32).prop_map(Op::SkipRows),
        (-3..6i32).prop_map(Op::SkipColumns),
        Just(Op::NewRow),
        Just(Op::ResetColumn),
        Just(Op::ResetRow),
        (-5..20i64).prop_map(Op::RowOffset),
        (-5..10i64).prop_map(Op::ColumnOffset),
        (-2..3i32, -2..3i32).prop_map(|(c, r)| Op::Text(c, r)),
        any::<bool>().prop_map(Op::Table),
        (0..200u32).prop_map(Op::Chart),
        Just(Op::NewSheet),
    ]
}

fn apply(writer: &mut SheetWriter, op: &Op) {
    match *op {
        Op::SkipRows(n) => {
            writer.skip_rows(n);
        }
        Op::SkipColumns(n) => {
            writer.skip_columns(n);
        }
        Op::NewRow => {
            writer.new_row();
        }
        Op::ResetColumn => {
            writer.reset_column();
        }
        Op::ResetRow => {
            writer.reset_row();
        }
        Op::RowOffset(n) => {
            writer.set_row_offset(n);
        }
        Op::ColumnOffset(n) => {
            writer.set_column_offset(n);
        }
        Op::Text(c, r) => {
            writer.append_text("t", c, r).unwrap();
        }
        Op::Table(titled) => {
            // A title may land on an earlier merge; anything else is a failure
            match writer.append_table(&people(), if titled { "T" } else { "" }) {
                Ok(_) | Err(ExportError::Document(DocumentError::MergedCellConflict(_))) => {}
                Err(err) => panic!("{op:?} failed: {err}"),
            }
        }
        Op::Chart(height) => {
            writer
                .append_chart(&ChartSeries::from_pairs([("k", 1.0)]), 100, height, "")
                .unwrap();
        }
        Op::NewSheet => {
            writer.new_sheet("").unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_cursor_never_leaves_base(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut writer = SheetWriter::new().unwrap();
        for op in &ops {
            apply(&mut writer, op);
            let cursor = *writer.cursor();
            prop_assert!(cursor.row() >= cursor.base_row(), "{op:?} left {cursor:?}");
            prop_assert!(cursor.column() >= cursor.base_column(), "{op:?} left {cursor:?}");
            prop_assert_eq!(writer.live_handles(), 3);
        }
    }

    #[test]
    fn prop_skip_clamps_to_one(n in i32::MIN..1) {
        let mut writer = SheetWriter::new().unwrap();
        writer.skip_rows(n).skip_columns(n);
        prop_assert_eq!((writer.cursor().row(), writer.cursor().column()), (2, 2));
    }
}
