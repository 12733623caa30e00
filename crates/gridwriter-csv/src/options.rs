/// How a CSV file is turned into a worksheet
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvReadOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Drop the first record instead of loading it
    pub has_header: bool,
    /// Load numbers and `true`/`false` as typed values; otherwise
    /// every field stays text, as the writer produced it
    pub auto_detect_types: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
            auto_detect_types: false,
        }
    }
}

/// How a worksheet is written out as CSV
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvWriteOptions {
    pub delimiter: u8,
    pub quote: u8,
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::CrLf,
        }
    }
}

/// Record separator written after each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineTerminator {
    /// `\n`
    Lf,
    /// `\r\n`, what spreadsheet applications emit
    #[default]
    CrLf,
}
