//! Writing and reopening documents

use crate::{people, text};
use gridwriter::{CsvStore, DataWriter, ExportError, ExportOptions, SheetWriter};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_write_without_target() {
    let mut writer = SheetWriter::new().unwrap();
    assert!(matches!(writer.write(), Err(ExportError::NoTarget)));
}

#[test]
fn test_write_to_target_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.csv");

    let mut writer = SheetWriter::new().unwrap();
    writer
        .set_target_path(&path)
        .append_table(&people(), "People")
        .unwrap();
    writer.write().unwrap();

    assert!(!writer.is_disposed());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "People,\r\nName,Age\r\nA,30\r\nB,25\r\nC,40\r\n"
    );
}

#[test]
fn test_write_keeps_every_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");

    let mut writer = SheetWriter::new().unwrap();
    writer
        .append_table(&people(), "People")
        .unwrap()
        .new_sheet("Second")
        .unwrap()
        .append_table(&people()[..1], "More")
        .unwrap();
    writer.write_to(&path).unwrap();

    let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
    assert_eq!(
        read("report-Sheet1.csv"),
        "People,\r\nName,Age\r\nA,30\r\nB,25\r\nC,40\r\n"
    );
    assert_eq!(read("report-Second.csv"), "More,\r\nName,Age\r\nA,30\r\n");
    assert!(!path.exists());
}

#[test]
fn test_open_seeds_cursor_past_used_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");

    let mut writer = SheetWriter::new().unwrap();
    writer.append_table(&people(), "People").unwrap();
    writer.write_to(&path).unwrap();
    writer.dispose();

    let mut reopened = SheetWriter::open(&path).unwrap();
    assert_eq!(reopened.target_path(), Some(path.as_path()));
    assert_eq!(reopened.current_sheet().unwrap().name(), "report");
    assert_eq!((reopened.cursor().row(), reopened.cursor().column()), (6, 3));

    reopened.reset_column().append_table(&people(), "More").unwrap();
    assert_eq!(text(&reopened, "A6"), "More");
    assert_eq!(text(&reopened, "A3"), "A");
    reopened.write().unwrap();

    let lines = std::fs::read_to_string(&path).unwrap().lines().count();
    assert_eq!(lines, 10);
}

#[test]
fn test_open_seeds_row_and_column_independently() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.csv");
    std::fs::write(&path, "a,b,c,d\r\nx\r\ny\r\n").unwrap();

    let writer = SheetWriter::open_with(CsvStore::default(), &path, ExportOptions::default()).unwrap();
    assert_eq!((writer.cursor().row(), writer.cursor().column()), (4, 5));
}

#[test]
fn test_open_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let writer = SheetWriter::open(&path).unwrap();
    assert_eq!((writer.cursor().row(), writer.cursor().column()), (1, 1));
    assert_eq!(writer.live_handles(), 3);
}

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        SheetWriter::open(dir.path().join("nope.csv")),
        Err(ExportError::Store(_))
    ));
}
