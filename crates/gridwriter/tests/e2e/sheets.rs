//! Sheets and single-cell text

use crate::{people, sheet, text};
use gridwriter::{BasicStyle, Color, DocumentError, ExportError, HorizontalAlign, SheetWriter, VerticalAlign};
use pretty_assertions::assert_eq;

#[test]
fn test_new_sheet_resets_cursor_to_base() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .set_row_offset(2)
        .set_column_offset(1)
        .append_table(&people(), "First")
        .unwrap();
    assert_eq!(text(&writer, "B3"), "First");

    writer.new_sheet("Second").unwrap();
    assert_eq!(sheet(&writer).name(), "Second");
    assert_eq!((writer.cursor().row(), writer.cursor().column()), (3, 2));

    writer.append_text("here", 0, 0).unwrap();
    assert_eq!(text(&writer, "B3"), "here");
    assert_eq!(writer.document().worksheet(0).unwrap().get_value("B3").unwrap().to_string(), "First");
}

#[test]
fn test_new_sheet_invalid_name() {
    let mut writer = SheetWriter::new().unwrap();
    let err = writer.new_sheet("a:b").unwrap_err();

    assert!(matches!(err, ExportError::Document(DocumentError::InvalidSheetName(_))));
    assert_eq!(writer.document().sheet_count(), 1);
    assert_eq!(writer.document().active_sheet(), 0);
}

#[test]
fn test_rename_then_new_sheet_between() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .set_current_sheet_name("Summary")
        .unwrap()
        .new_sheet("Details")
        .unwrap();
    writer.document_mut().set_active_sheet(0).unwrap();
    writer.new_sheet("Notes").unwrap();

    let names: Vec<_> = writer.document().worksheets().map(|ws| ws.name()).collect();
    assert_eq!(names, vec!["Summary", "Notes", "Details"]);
}

#[test]
fn test_text_cells_share_the_cell_style() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .set_cell_style(BasicStyle {
            bold: Some(true),
            fill_color: Color::LIGHT_GRAY,
            horizontal: Some(HorizontalAlign::Right),
            vertical: Some(VerticalAlign::Center),
            ..BasicStyle::default()
        })
        .append_text("Total", 0, 0)
        .unwrap()
        .append_text("42", 0, 0)
        .unwrap();

    let ws = sheet(&writer);
    assert_eq!(text(&writer, "A1"), "Total");
    assert_eq!(text(&writer, "B1"), "42");
    assert_eq!(ws.cell_style("A1").unwrap(), ws.cell_style("B1").unwrap());
    assert!(ws.cell_style("B1").unwrap().unwrap().font.bold);
    assert_eq!(writer.cursor().column(), 3);
}
