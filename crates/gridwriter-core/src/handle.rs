//! Native handle bookkeeping
//!
//! Every object a client reaches into the document through (the document
//! itself, its sheet collection, a sheet, a cell region, a chart object) is
//! represented by an opaque [`Handle`] issued from a shared [`HandleTable`].
//! Clients must release each handle exactly once; outstanding handles stay
//! visible through [`HandleTable::live_count`].

use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Opaque handle type
pub type Handle = u64;

/// Null handle constant
pub const HANDLE_NULL: Handle = 0;

/// What a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// The open document
    Document,
    /// The document's sheet collection
    Sheets,
    /// A single sheet
    Sheet,
    /// A rectangular cell region
    Range,
    /// An embedded chart object
    ChartObject,
}

/// Table of live handles
///
/// Uses interior mutability so a single table can be shared (`Rc`) between
/// the document and the guards that release handles on drop.
#[derive(Debug)]
pub struct HandleTable {
    live: RefCell<HashMap<Handle, HandleKind>>,
    next_handle: Cell<Handle>,
    capacity: Cell<Option<usize>>,
}

impl HandleTable {
    /// Create an unbounded handle table
    pub fn new() -> Self {
        Self {
            live: RefCell::new(HashMap::new()),
            next_handle: Cell::new(1), // Start at 1, 0 is null
            capacity: Cell::new(None),
        }
    }

    /// Create a table that refuses to hold more than `capacity` live handles
    pub fn with_capacity(capacity: usize) -> Self {
        let table = Self::new();
        table.set_capacity(Some(capacity));
        table
    }

    /// Change the live-handle limit (`None` = unbounded)
    pub fn set_capacity(&self, capacity: Option<usize>) {
        self.capacity.set(capacity);
    }

    /// Issue a new handle
    pub fn acquire(&self, kind: HandleKind) -> Result<Handle> {
        let mut live = self.live.borrow_mut();
        if let Some(cap) = self.capacity.get() {
            if live.len() >= cap {
                return Err(Error::HandleExhausted(live.len()));
            }
        }

        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        live.insert(handle, kind);
        Ok(handle)
    }

    /// Release a handle; fails if it is unknown, already released, or revoked
    pub fn release(&self, handle: Handle) -> Result<()> {
        match self.live.borrow_mut().remove(&handle) {
            Some(_) => Ok(()),
            None => Err(Error::StaleHandle(handle)),
        }
    }

    /// Invalidate a handle from the host side without the client releasing it
    ///
    /// A later [`release`](Self::release) of the same handle fails.
    pub fn revoke(&self, handle: Handle) -> bool {
        self.live.borrow_mut().remove(&handle).is_some()
    }

    /// Kind of a live handle
    pub fn kind(&self, handle: Handle) -> Option<HandleKind> {
        self.live.borrow().get(&handle).copied()
    }

    /// Check whether a handle is live
    pub fn is_live(&self, handle: Handle) -> bool {
        self.live.borrow().contains_key(&handle)
    }

    /// Number of handles not yet released
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    /// Number of live handles of one kind
    pub fn live_count_of(&self, kind: HandleKind) -> usize {
        self.live.borrow().values().filter(|k| **k == kind).count()
    }
}

impl Default for HandleTable {
    fn default() -> Self {
        Self::new()
    }
}
