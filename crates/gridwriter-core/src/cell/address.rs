use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// One cell of a sheet
///
/// Indices are 0-based. A1 notation and [`from_position`](Self::from_position)
/// count from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub col: u16,
}

impl CellAddress {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Address of a 1-based grid position, as tracked by a write cursor
    ///
    /// ```
    /// use gridwriter_core::CellAddress;
    ///
    /// let addr = CellAddress::from_position(3, 2).unwrap();
    /// assert_eq!(addr.to_string(), "B3");
    /// assert!(CellAddress::from_position(0, 1).is_err());
    /// ```
    pub fn from_position(row: u32, column: u32) -> Result<Self> {
        if !(1..=MAX_ROWS).contains(&row) {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if !(1..=u32::from(MAX_COLS)).contains(&column) {
            return Err(Error::ColumnOutOfBounds(column, MAX_COLS));
        }
        Ok(Self::new(row - 1, (column - 1) as u16))
    }

    /// Parse `B7` style notation; absolute markers (`$B$7`) are allowed
    pub fn parse(text: &str) -> Result<Self> {
        let bad = |why: &str| Error::InvalidAddress(format!("{why} in '{text}'"));

        let plain: String = text.trim().chars().filter(|&c| c != '$').collect();
        let digits_at = plain
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(plain.len());
        let (letters, digits) = plain.split_at(digits_at);

        if letters.is_empty() {
            return Err(bad("missing column"));
        }
        let col = column_index(letters)?;
        let row: u32 = digits.parse().map_err(|_| bad("missing or bad row"))?;
        if row == 0 {
            return Err(bad("row 0"));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(Self::new(row - 1, col))
    }
}

/// Letters of a 0-based column: 0 is `A`, 26 is `AA`
pub(crate) fn column_name(col: u16) -> String {
    let mut letters = Vec::new();
    let mut n = u32::from(col) + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// 0-based column of a run of letters, case-insensitive
pub(crate) fn column_index(letters: &str) -> Result<u16> {
    let mut n: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!("bad column letter '{c}'")));
        }
        n = n * 26 + u32::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        if n > u32::from(MAX_COLS) {
            return Err(Error::ColumnOutOfBounds(n, MAX_COLS));
        }
    }
    n.checked_sub(1)
        .map(|c| c as u16)
        .ok_or_else(|| Error::InvalidAddress("empty column".into()))
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.col), self.row + 1)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
