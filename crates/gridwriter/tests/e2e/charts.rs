//! Chart embedding

use crate::{people, sheet, text};
use gridwriter::{ChartAnchor, ChartSeries, ChartType, DataReference, ExportError, ExportOptions, SheetWriter};
use pretty_assertions::assert_eq;

#[test]
fn test_chart_below_table() {
    let mut writer = SheetWriter::new().unwrap();
    writer.append_table(&people(), "People").unwrap().new_row();

    let series = ChartSeries::from_pairs(people().into_iter().map(|p| (p.name, f64::from(p.age))));
    writer.append_chart(&series, 300, 45, "Age").unwrap();

    let chart = &sheet(&writer).charts()[0];
    let widths = sheet(&writer).column_width_points(0);
    assert_eq!(chart.anchor, ChartAnchor::new(widths, 90.0, 300, 45));
    assert_eq!(
        chart.series[0].categories,
        Some(DataReference::strings(vec!["A".into(), "B".into(), "C".into()]))
    );

    // 45 px = 33.75 pt: the chart hangs over rows 7..=9
    assert_eq!(writer.cursor().row(), 10);
    assert_eq!(writer.cursor().column(), 1);
}

#[test]
fn test_chart_advance_honours_row_heights() {
    let mut writer = SheetWriter::new().unwrap();
    writer.document_mut().worksheet_mut(0).unwrap().set_row_height(1, 60.0);

    writer
        .append_chart(&ChartSeries::from_pairs([("x", 1.0)]), 100, 80, "")
        .unwrap();

    // 80 px = 60 pt, exactly the height of row 2 below the anchor row
    assert_eq!(writer.cursor().row(), 3);
}

#[test]
fn test_text_after_chart_lands_below_it() {
    let mut writer = SheetWriter::new().unwrap();
    writer
        .append_chart(&ChartSeries::from_pairs([("x", 1.0)]), 100, 100, "")
        .unwrap()
        .append_text("after", 0, 0)
        .unwrap();

    let ws = sheet(&writer);
    let anchor = ws.charts()[0].anchor;
    let row = writer.cursor().row();
    assert_eq!(anchor.top, 15.0);
    assert_eq!(text(&writer, &format!("A{row}")), "after");

    // rows above the text, 0-based 0..=row-2, end where the text row starts
    let text_top = ws.rows_height_points(0, row - 2);
    assert!(text_top >= anchor.top + 75.0);
}

#[test]
fn test_zero_height_chart_advances_at_most_one_row() {
    let mut writer = SheetWriter::new().unwrap();
    writer.skip_rows(9);
    writer.append_chart(&ChartSeries::default(), 0, 0, "").unwrap();
    assert_eq!(writer.cursor().row(), 11);
}

#[test]
fn test_default_chart_type_comes_from_options() {
    let mut writer = SheetWriter::with_options(ExportOptions {
        chart_type: ChartType::Line,
        ..Default::default()
    })
    .unwrap();
    writer
        .append_chart(&ChartSeries::from_pairs([("x", 1.0)]), 100, 10, "")
        .unwrap()
        .append_chart_with_type(ChartType::Area, &ChartSeries::from_pairs([("y", 2.0)]), 100, 10, "")
        .unwrap();

    let types: Vec<_> = sheet(&writer).charts().iter().map(|c| c.chart_type).collect();
    assert_eq!(types, vec![ChartType::Line, ChartType::Area]);
}

#[test]
fn test_mismatched_series_embeds_nothing() {
    let mut writer = SheetWriter::new().unwrap();
    let series = ChartSeries::new(vec!["a".into(), "b".into()], vec![1.0]);

    assert!(matches!(
        writer.append_chart(&series, 10, 10, ""),
        Err(ExportError::SeriesLengthMismatch { categories: 2, values: 1 })
    ));
    assert!(sheet(&writer).charts().is_empty());
    assert_eq!(writer.live_handles(), 3);
}
