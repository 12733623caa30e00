//! Native handle lifetimes

use std::rc::Rc;

use crate::people;
use gridwriter::{
    ChartSeries, DataWriter, DocumentError, ExportError, ExportOptions, HandleKind, SheetWriter,
};
use pretty_assertions::assert_eq;

fn with_capacity(capacity: usize) -> SheetWriter {
    SheetWriter::with_options(ExportOptions {
        handle_capacity: Some(capacity),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_operations_leave_only_session_handles() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .append_table(&people(), "People")
        .unwrap()
        .new_row()
        .append_chart(&ChartSeries::from_pairs([("a", 1.0)]), 200, 100, "s")
        .unwrap()
        .append_text("done", 0, 0)
        .unwrap()
        .new_sheet("Next")
        .unwrap();

    let handles = writer.document().handles();
    assert_eq!(writer.live_handles(), 3);
    assert_eq!(handles.live_count_of(HandleKind::Document), 1);
    assert_eq!(handles.live_count_of(HandleKind::Sheets), 1);
    assert_eq!(handles.live_count_of(HandleKind::Sheet), 1);
}

#[test]
fn test_exhausted_table_releases_what_it_took() {
    let mut writer = with_capacity(4);
    let err = writer.append_table(&people(), "People").unwrap_err();

    assert!(matches!(
        err,
        ExportError::Document(DocumentError::HandleExhausted(4))
    ));
    assert_eq!(writer.live_handles(), 3);
}

#[test]
fn test_table_needs_two_transient_handles() {
    let mut writer = with_capacity(5);
    writer.append_table(&people(), "People").unwrap();
    assert_eq!(writer.live_handles(), 3);
}

#[test]
fn test_chart_needs_one_transient_handle() {
    let mut writer = with_capacity(4);
    writer
        .append_chart(&ChartSeries::from_pairs([("a", 1.0)]), 100, 300, "s")
        .unwrap();
    assert_eq!(writer.live_handles(), 3);
}

#[test]
fn test_dispose_is_idempotent() {
    let mut writer = SheetWriter::new().unwrap();
    writer.dispose();
    writer.dispose();

    assert!(writer.is_disposed());
    assert_eq!(writer.live_handles(), 0);
}

#[test]
fn test_operations_after_dispose_fail() {
    let mut writer = SheetWriter::new().unwrap();
    writer.set_target_path("unused.csv");
    writer.dispose();

    assert!(matches!(
        writer.append_table(&people(), ""),
        Err(ExportError::Disposed)
    ));
    assert!(matches!(writer.append_text("x", 0, 0), Err(ExportError::Disposed)));
    assert!(matches!(writer.new_sheet("x"), Err(ExportError::Disposed)));
    assert!(matches!(writer.write(), Err(ExportError::Disposed)));
}

#[test]
fn test_drop_releases_session_handles() {
    let writer = SheetWriter::new().unwrap();
    let handles = Rc::clone(writer.document().handles());
    assert_eq!(handles.live_count(), 3);

    drop(writer);
    assert_eq!(handles.live_count(), 0);
}

#[test]
fn test_failed_release_does_not_stop_cleanup() {
    let mut writer = SheetWriter::new().unwrap();
    let handles = Rc::clone(writer.document().handles());

    // The host drops the sheet collection behind the session's back
    assert!(handles.revoke(2));
    assert_eq!(handles.kind(1), Some(HandleKind::Document));

    writer.dispose();
    assert_eq!(handles.live_count(), 0);
}
