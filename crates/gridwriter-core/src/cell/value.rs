use std::fmt;

/// Content of a cell
///
/// Writers only ever store text; numbers and booleans come from documents
/// read back through a store.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl CellValue {
    pub fn string(text: impl Into<String>) -> Self {
        CellValue::String(text.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        if let CellValue::Number(n) = *self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        if let CellValue::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

/// Renders the text a cell shows; `Empty` renders nothing
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Boolean(true) => f.write_str("TRUE"),
            CellValue::Boolean(false) => f.write_str("FALSE"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::String(text.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::String(text)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}
