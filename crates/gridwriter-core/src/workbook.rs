//! The document: sheets, named styles and the handle table

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::handle::HandleTable;
use crate::named_style::NamedStyles;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// An in-memory spreadsheet document
///
/// Sheet names are unique ignoring case. Clients that hold on to parts of the
/// document do so through [`handles`](Self::handles).
#[derive(Debug)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
    active: usize,
    named_styles: NamedStyles,
    handles: Rc<HandleTable>,
}

impl Workbook {
    /// A document with a single empty `Sheet1`
    pub fn new() -> Self {
        let mut workbook = Self::empty();
        workbook.sheets.push(Worksheet::new("Sheet1"));
        workbook
    }

    /// A document without sheets, for stores that build one up
    pub fn empty() -> Self {
        Self {
            sheets: Vec::new(),
            active: 0,
            named_styles: NamedStyles::new(),
            handles: Rc::new(HandleTable::new()),
        }
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.sheets.get(index)
    }

    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.sheets.get_mut(index)
    }

    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.sheets.iter()
    }

    /// A sheet to write into plus the styles it may be painted with
    pub fn sheet_and_styles_mut(&mut self, index: usize) -> Option<(&mut Worksheet, &NamedStyles)> {
        let Self {
            sheets,
            named_styles,
            ..
        } = self;
        sheets.get_mut(index).map(|sheet| (sheet, &*named_styles))
    }

    /// Append a sheet named `SheetN`, returning its index
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.unused_name();
        self.add_worksheet_with_name(&name)
    }

    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.add_existing_worksheet(Worksheet::new(name))
    }

    /// Append a sheet built elsewhere, e.g. by a reader
    pub fn add_existing_worksheet(&mut self, sheet: Worksheet) -> Result<usize> {
        self.check_name(sheet.name(), None)?;
        self.sheets.push(sheet);
        Ok(self.sheets.len() - 1)
    }

    /// Insert a sheet before `index`; `None` picks an unused `SheetN` name
    ///
    /// The active sheet stays the same sheet, so its index shifts when the
    /// insertion lands at or before it.
    pub fn insert_worksheet(&mut self, index: usize, name: Option<&str>) -> Result<()> {
        if index > self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        let name = match name {
            Some(name) => {
                self.check_name(name, None)?;
                name.to_owned()
            }
            None => self.unused_name(),
        };

        let had_sheets = !self.sheets.is_empty();
        self.sheets.insert(index, Worksheet::new(name));
        if had_sheets && self.active >= index {
            self.active += 1;
        }
        Ok(())
    }

    pub fn rename_worksheet(&mut self, index: usize, name: &str) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        self.check_name(name, Some(index))?;
        self.sheets[index].set_name(name);
        Ok(())
    }

    pub fn active_sheet(&self) -> usize {
        self.active
    }

    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        self.active = index;
        Ok(())
    }

    pub fn named_styles(&self) -> &NamedStyles {
        &self.named_styles
    }

    /// Register document-specific styles next to the built-in ones
    pub fn named_styles_mut(&mut self) -> &mut NamedStyles {
        &mut self.named_styles
    }

    pub fn handles(&self) -> &Rc<HandleTable> {
        &self.handles
    }

    fn check_name(&self, name: &str, renaming: Option<usize>) -> Result<()> {
        validate_sheet_name(name)?;
        let clash = self
            .sheets
            .iter()
            .enumerate()
            .any(|(i, sheet)| Some(i) != renaming && sheet.name().eq_ignore_ascii_case(name));
        if clash {
            return Err(Error::DuplicateSheetName(name.into()));
        }
        Ok(())
    }

    fn unused_name(&self) -> String {
        (self.sheets.len() + 1..)
            .map(|n| format!("Sheet{n}"))
            .find(|name| self.check_name(name, None).is_ok())
            .unwrap_or_default()
    }
}

/// Reject names a document cannot hold: empty, too long or with reserved
/// characters. Clashes with other sheets are the workbook's concern.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    const RESERVED: [char; 7] = [':', '\\', '/', '?', '*', '[', ']'];

    if name.is_empty() {
        return Err(Error::InvalidSheetName("name is empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "'{name}' is longer than {MAX_SHEET_NAME_LEN} characters"
        )));
    }
    if let Some(c) = name.chars().find(|c| RESERVED.contains(c)) {
        return Err(Error::InvalidSheetName(format!("'{name}' contains '{c}'")));
    }
    Ok(())
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
