//! Scoped document handles
//!
//! Every cell region or chart object a layout operation touches is reached
//! through a handle from the document's [`HandleTable`]. The guards here
//! release their handle when they go out of scope, so an operation that
//! returns early through `?` leaves nothing behind.

use std::rc::Rc;

use gridwriter_core::{CellRange, Handle, HandleKind, HandleTable};

/// Release a handle, logging instead of failing
pub(crate) fn release_logged(handles: &HandleTable, handle: Handle, kind: HandleKind) {
    if let Err(err) = handles.release(handle) {
        tracing::warn!("Failed to release {kind:?} handle {handle}: {err}");
    }
}

/// A handle released on drop
#[derive(Debug)]
pub(crate) struct HandleGuard {
    handles: Rc<HandleTable>,
    handle: Handle,
    kind: HandleKind,
}

impl HandleGuard {
    pub(crate) fn acquire(
        handles: &Rc<HandleTable>,
        kind: HandleKind,
    ) -> gridwriter_core::Result<Self> {
        let handle = handles.acquire(kind)?;
        Ok(Self {
            handles: Rc::clone(handles),
            handle,
            kind,
        })
    }

    pub(crate) fn handle(&self) -> Handle {
        self.handle
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        release_logged(&self.handles, self.handle, self.kind);
    }
}

/// A cell region held open for the duration of one layout step
#[derive(Debug)]
pub(crate) struct Region {
    _guard: HandleGuard,
    range: CellRange,
}

impl Region {
    pub(crate) fn acquire(
        handles: &Rc<HandleTable>,
        range: CellRange,
    ) -> gridwriter_core::Result<Self> {
        Ok(Self {
            _guard: HandleGuard::acquire(handles, HandleKind::Range)?,
            range,
        })
    }

    pub(crate) fn range(&self) -> CellRange {
        self.range
    }
}
