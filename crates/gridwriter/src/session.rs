//! The writer session
//!
//! A [`SheetWriter`] owns one open document, the cursor moving over its
//! active sheet, and the native handles the session holds for its lifetime:
//! the document, its sheet collection and the active sheet. Those three are
//! released exactly once, in reverse order, on [`dispose`](crate::DataWriter::dispose)
//! or drop.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use gridwriter_core::{
    CellAddress, CellRange, Handle, HandleKind, NamedStyles, Workbook, Worksheet,
};

use crate::cursor::GridCursor;
use crate::error::{ExportError, Result};
use crate::format::{CellFormatter, PlainText};
use crate::options::ExportOptions;
use crate::region::{release_logged, Region};
use crate::store::{CsvStore, DocumentStore};
use crate::style::{paint, TableStyle, WriterStyle, NO_STYLE};

/// Handles held for the whole session
#[derive(Debug, Default)]
pub(crate) struct SessionHandles {
    pub(crate) document: Option<Handle>,
    pub(crate) sheets: Option<Handle>,
    pub(crate) active_sheet: Option<Handle>,
}

/// Stateful, cursor-driven writer over a spreadsheet document
///
/// Every layout operation takes `&mut self` and returns the session again so
/// calls chain:
///
/// ```rust
/// use gridwriter::{record, SheetWriter};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// record!(Person { name, age });
///
/// let people = vec![
///     Person { name: "A".into(), age: 30 },
///     Person { name: "B".into(), age: 25 },
/// ];
///
/// let mut writer = SheetWriter::new()?;
/// writer
///     .append_table(&people, "People")?
///     .new_row()
///     .new_row()
///     .append_text("Total: 2", 0, 0)?;
///
/// assert_eq!(writer.cursor().row(), 6);
/// # Ok::<(), gridwriter::ExportError>(())
/// ```
#[derive(Debug)]
pub struct SheetWriter {
    pub(crate) workbook: Workbook,
    pub(crate) cursor: GridCursor,
    pub(crate) table_style: TableStyle,
    pub(crate) cell_style: Rc<dyn WriterStyle>,
    pub(crate) formatter: Rc<dyn CellFormatter>,
    pub(crate) options: ExportOptions,
    pub(crate) store: Box<dyn DocumentStore>,
    pub(crate) target_path: Option<PathBuf>,
    pub(crate) session: SessionHandles,
    pub(crate) disposed: bool,
}

impl SheetWriter {
    /// Start a session on a new one-sheet document
    pub fn new() -> Result<Self> {
        Self::with_options(ExportOptions::default())
    }

    /// Start a session on a new document with custom options
    pub fn with_options(options: ExportOptions) -> Result<Self> {
        Self::from_workbook(Workbook::new(), Box::new(CsvStore::default()), options, None)
    }

    /// Open an existing CSV document
    ///
    /// The path becomes the session's write target.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(CsvStore::default(), path, ExportOptions::default())
    }

    /// Open an existing document through `store`
    ///
    /// The cursor starts one row below the last used row and one column right
    /// of the last used column. Both are found independently, so for ragged
    /// data the cursor can sit outside the used rectangle.
    pub fn open_with<S, P>(store: S, path: P, options: ExportOptions) -> Result<Self>
    where
        S: DocumentStore + 'static,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let workbook = store.open(path)?;
        tracing::info!(
            "Opened {} ({} sheets)",
            path.display(),
            workbook.sheet_count()
        );
        Self::from_workbook(workbook, Box::new(store), options, Some(path.to_path_buf()))
    }

    fn from_workbook(
        mut workbook: Workbook,
        store: Box<dyn DocumentStore>,
        options: ExportOptions,
        target_path: Option<PathBuf>,
    ) -> Result<Self> {
        if workbook.is_empty() {
            workbook.add_worksheet()?;
        }
        workbook.handles().set_capacity(options.handle_capacity);

        let handles = Rc::clone(workbook.handles());
        let mut writer = Self {
            workbook,
            cursor: GridCursor::new(),
            table_style: TableStyle::default(),
            cell_style: Rc::new(NO_STYLE),
            formatter: Rc::new(PlainText),
            options,
            store,
            target_path,
            session: SessionHandles::default(),
            disposed: false,
        };

        // Acquired one at a time so a failure leaves drop to release the rest
        writer.session.document = Some(handles.acquire(HandleKind::Document)?);
        writer.session.sheets = Some(handles.acquire(HandleKind::Sheets)?);
        writer.session.active_sheet = Some(handles.acquire(HandleKind::Sheet)?);

        writer.seed_cursor();
        Ok(writer)
    }

    fn seed_cursor(&mut self) {
        let sheet = self.workbook.worksheet(self.workbook.active_sheet());
        if let Some(row) = sheet.and_then(Worksheet::last_used_row) {
            self.cursor.set_row(row.saturating_add(2));
        }
        if let Some(col) = sheet.and_then(Worksheet::last_used_column) {
            self.cursor.set_column(u32::from(col) + 2);
        }
    }

    // === Cursor ===

    /// Advance `count` rows (counts below 1 advance one)
    pub fn skip_rows(&mut self, count: i32) -> &mut Self {
        self.cursor.skip_rows(count);
        self
    }

    /// Advance `count` columns (counts below 1 advance one)
    pub fn skip_columns(&mut self, count: i32) -> &mut Self {
        self.cursor.skip_columns(count);
        self
    }

    /// Move to the base column of the next row
    pub fn new_row(&mut self) -> &mut Self {
        self.cursor.new_row();
        self
    }

    pub fn reset_column(&mut self) -> &mut Self {
        self.cursor.reset_column();
        self
    }

    pub fn reset_row(&mut self) -> &mut Self {
        self.cursor.reset_row();
        self
    }

    /// Move the document's first usable row down by `offset` rows
    pub fn set_row_offset(&mut self, offset: i64) -> &mut Self {
        self.cursor.set_row_offset(offset);
        self
    }

    /// Move the document's first usable column right by `offset` columns
    pub fn set_column_offset(&mut self, offset: i64) -> &mut Self {
        self.cursor.set_column_offset(offset);
        self
    }

    // === Sheets ===

    /// Insert a sheet right after the active one and continue writing there
    ///
    /// An empty name lets the document pick one. The cursor returns to the
    /// base row and column.
    pub fn new_sheet(&mut self, name: &str) -> Result<&mut Self> {
        self.ensure_open()?;
        let handles = Rc::clone(self.workbook.handles());
        let sheet = handles.acquire(HandleKind::Sheet)?;

        let index = self.workbook.active_sheet() + 1;
        let name = Some(name).filter(|name| !name.is_empty());
        let inserted = self
            .workbook
            .insert_worksheet(index, name)
            .and_then(|()| self.workbook.set_active_sheet(index));
        if let Err(err) = inserted {
            release_logged(&handles, sheet, HandleKind::Sheet);
            return Err(err.into());
        }

        if let Some(previous) = self.session.active_sheet.replace(sheet) {
            release_logged(&handles, previous, HandleKind::Sheet);
        }
        self.cursor.reset_row();
        self.cursor.reset_column();

        tracing::debug!("Switched to new sheet at index {index}");
        Ok(self)
    }

    /// Rename the active sheet
    pub fn set_current_sheet_name(&mut self, name: &str) -> Result<&mut Self> {
        self.ensure_open()?;
        let index = self.workbook.active_sheet();
        self.workbook.rename_worksheet(index, name)?;
        Ok(self)
    }

    // === Text ===

    /// Write `text` at the cursor shifted by the given offsets
    ///
    /// Negative offsets count as 0. The cell gets the session's cell style and
    /// the cursor moves one column right.
    pub fn append_text(&mut self, text: &str, column_offset: i32, row_offset: i32) -> Result<&mut Self> {
        self.ensure_open()?;
        let row = self.cursor.row().saturating_add(row_offset.max(0) as u32);
        let column = self.cursor.column().saturating_add(column_offset.max(0) as u32);
        let addr = CellAddress::from_position(row, column)?;

        let handles = Rc::clone(self.workbook.handles());
        let style = Rc::clone(&self.cell_style);
        let (sheet, styles) = active_sheet(&mut self.workbook)?;
        {
            let region = Region::acquire(&handles, CellRange::single(addr))?;
            sheet.set_cell_value_at(addr.row, addr.col, text)?;
            paint(style.as_ref(), sheet, styles, region.range())?;
        }

        self.cursor.skip_columns(1);
        Ok(self)
    }

    // === Configuration ===

    /// Styles used by subsequent tables
    pub fn set_table_style(&mut self, style: TableStyle) -> &mut Self {
        self.table_style = style;
        self
    }

    pub fn table_style(&self) -> &TableStyle {
        &self.table_style
    }

    /// Style applied to cells written by [`append_text`](Self::append_text)
    pub fn set_cell_style(&mut self, style: impl WriterStyle + 'static) -> &mut Self {
        self.cell_style = Rc::new(style);
        self
    }

    /// Hook turning field text into cell text
    pub fn set_cell_formatter(&mut self, formatter: impl CellFormatter + 'static) -> &mut Self {
        self.formatter = Rc::new(formatter);
        self
    }

    /// Where [`write`](crate::DataWriter::write) persists the document
    pub fn set_target_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.target_path = Some(path.into());
        self
    }

    pub fn target_path(&self) -> Option<&Path> {
        self.target_path.as_deref()
    }

    // === Inspection ===

    pub fn cursor(&self) -> &GridCursor {
        &self.cursor
    }

    /// The document being written
    pub fn document(&self) -> &Workbook {
        &self.workbook
    }

    /// The document being written, e.g. to register named styles
    pub fn document_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }

    /// The sheet writes currently go to
    pub fn current_sheet(&self) -> Option<&Worksheet> {
        self.workbook.worksheet(self.workbook.active_sheet())
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Handles the document has issued and not yet had back
    pub fn live_handles(&self) -> usize {
        self.workbook.handles().live_count()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.disposed {
            return Err(ExportError::Disposed);
        }
        Ok(())
    }

    /// Release session handles in reverse acquisition order
    pub(crate) fn release_session_handles(&mut self) {
        let handles = Rc::clone(self.workbook.handles());
        let slots = [
            (&mut self.session.active_sheet, HandleKind::Sheet),
            (&mut self.session.sheets, HandleKind::Sheets),
            (&mut self.session.document, HandleKind::Document),
        ];
        for (slot, kind) in slots {
            if let Some(handle) = slot.take() {
                release_logged(&handles, handle, kind);
            }
        }
        self.disposed = true;
    }
}

impl Drop for SheetWriter {
    fn drop(&mut self) {
        self.release_session_handles();
    }
}

/// The active sheet with the registry its styles resolve against
pub(crate) fn active_sheet(workbook: &mut Workbook) -> Result<(&mut Worksheet, &NamedStyles)> {
    let index = workbook.active_sheet();
    let count = workbook.sheet_count();
    workbook
        .sheet_and_styles_mut(index)
        .ok_or(ExportError::Document(gridwriter_core::Error::SheetOutOfBounds(
            index, count,
        )))
}
