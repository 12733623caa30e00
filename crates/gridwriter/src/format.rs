//! Cell text formatting hook

use std::fmt;

/// Turns a field's text into the text written to its cell
///
/// `format` is the column's format code from its [`FieldDisplay`](crate::FieldDisplay)
/// annotation, if any.
pub trait CellFormatter: fmt::Debug {
    fn format(&self, text: String, format: Option<&str>) -> String;
}

/// Writes field text unchanged, ignoring format codes
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl CellFormatter for PlainText {
    fn format(&self, text: String, _format: Option<&str>) -> String {
        text
    }
}
