//! Table layout

use crate::{accounts, people, sheet, text, Person};
use gridwriter::{
    BasicStyle, CellFormatter, Color, DocumentError, ExportError, PresetStyle, SheetWriter, StripedStyle,
    TableStyle,
};
use pretty_assertions::assert_eq;

#[test]
fn test_people_table() {
    let mut writer = SheetWriter::new().unwrap();
    writer.append_table(&people(), "People").unwrap();

    let ws = sheet(&writer);
    assert_eq!(ws.merged_regions().len(), 1);
    assert_eq!(ws.merged_regions()[0].to_string(), "A1:B1");
    assert_eq!(text(&writer, "A1"), "People");

    assert_eq!(text(&writer, "A2"), "Name");
    assert_eq!(text(&writer, "B2"), "Age");
    assert_eq!(ws.autofilter().unwrap().to_string(), "A2:B2");

    let body: Vec<(String, String)> = (3..=5)
        .map(|row| (text(&writer, &format!("A{row}")), text(&writer, &format!("B{row}"))))
        .collect();
    assert_eq!(
        body,
        vec![
            ("A".to_string(), "30".to_string()),
            ("B".to_string(), "25".to_string()),
            ("C".to_string(), "40".to_string()),
        ]
    );
    assert_eq!(text(&writer, "A6"), "");

    assert_eq!(writer.cursor().row(), 5);
    assert_eq!(writer.cursor().column(), 1);
}

#[test]
fn test_append_then_reset_column_returns_to_start() {
    let mut writer = SheetWriter::new().unwrap();
    writer.skip_columns(2);
    let start = writer.cursor().column();

    writer.append_table(&people(), "").unwrap().reset_column();
    assert_eq!(writer.cursor().column(), 1);

    writer.new_row().skip_columns(2).append_table(&people(), "").unwrap();
    assert_eq!(writer.cursor().column(), start);
}

#[test]
fn test_tables_stack_with_new_row() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .append_table(&people(), "First")
        .unwrap()
        .new_row()
        .new_row()
        .append_table(&people(), "Second")
        .unwrap();

    assert_eq!(text(&writer, "A7"), "Second");
    assert_eq!(sheet(&writer).merged_regions()[1].to_string(), "A7:B7");
    assert_eq!(sheet(&writer).autofilter().unwrap().to_string(), "A8:B8");
    assert_eq!(writer.cursor().row(), 11);
}

#[test]
fn test_excluded_field_is_skipped_regardless_of_title() {
    let mut writer = SheetWriter::new().unwrap();
    writer.append_table(&accounts(), "").unwrap();

    assert_eq!(text(&writer, "A1"), "login");
    assert_eq!(text(&writer, "B1"), "Balance");
    assert_eq!(text(&writer, "C1"), "");
    assert_eq!(text(&writer, "B2"), "10.5");
    assert!(!sheet(&writer)
        .iter_cells()
        .any(|(_, _, cell)| cell.value.to_string() == "hunter2"));
}

#[test]
fn test_empty_input_leaves_cursor() {
    let mut writer = SheetWriter::new().unwrap();
    writer.skip_rows(4).skip_columns(2);
    let before = *writer.cursor();

    let err = writer.append_table::<Person>(&[], "Nobody").unwrap_err();
    assert!(matches!(err, ExportError::EmptyInput));
    assert_eq!(*writer.cursor(), before);
    assert!(sheet(&writer).is_empty());
}

#[test]
fn test_table_styles_are_applied_per_part() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .set_table_style(
            TableStyle::new()
                .with_title(PresetStyle::new("Heading 1"))
                .with_header(BasicStyle::new().bold(true))
                .with_body(StripedStyle::new([Color::RED, Color::BLUE])),
        )
        .append_table(&people(), "People")
        .unwrap();

    let ws = sheet(&writer);
    assert_eq!(ws.cell_style("A1").unwrap().unwrap().font.size, 15.0);
    assert!(ws.cell_style("B2").unwrap().unwrap().font.bold);

    let fills: Vec<_> = (2..5u32)
        .map(|row| ws.cell_style_at(row, 1).unwrap().fill.color())
        .collect();
    assert_eq!(
        fills,
        vec![Some(Color::RED), Some(Color::BLUE), Some(Color::RED)]
    );
    assert_eq!(ws.cell_style("A2").unwrap().unwrap().fill.color(), None);
}

#[test]
fn test_unknown_preset_fails_without_leaking() {
    let mut writer = SheetWriter::new().unwrap();
    writer.set_table_style(TableStyle::new().with_header(PresetStyle::new("Sparkly")));

    let err = writer.append_table(&people(), "People").unwrap_err();
    assert!(matches!(
        err,
        ExportError::Document(DocumentError::UnknownStyle(_))
    ));
    assert_eq!(writer.live_handles(), 3);
}

#[derive(Debug)]
struct Fixed;

impl CellFormatter for Fixed {
    fn format(&self, text: String, format: Option<&str>) -> String {
        match (format, text.parse::<f64>()) {
            (Some("0.00"), Ok(value)) => format!("{value:.2}"),
            _ => text,
        }
    }
}

#[test]
fn test_cell_formatter_receives_format() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .set_cell_formatter(Fixed)
        .append_table(&accounts(), "")
        .unwrap();

    assert_eq!(text(&writer, "B2"), "10.50");
    assert_eq!(text(&writer, "B3"), "0.00");
    assert_eq!(text(&writer, "A3"), "guest");
}

#[test]
fn test_autofit_after_table() {
    let mut writer = SheetWriter::new().unwrap();
    writer.append_table(&accounts(), "A very long title that is ignored").unwrap();

    let ws = sheet(&writer);
    assert_eq!(ws.column_width(0), 8.0);
    assert_eq!(ws.column_width(1), 9.0);
}
