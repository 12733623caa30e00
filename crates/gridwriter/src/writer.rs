//! The writer contract shared by all sinks

use std::path::Path;

use crate::error::{ExportError, Result};
use crate::session::SheetWriter;

/// Persist and release a document
pub trait DataWriter {
    /// What [`write_to`](Self::write_to) persists to
    type Target: ?Sized;

    /// Persist to the configured target
    fn write(&mut self) -> Result<()>;

    /// Persist to an explicit target
    fn write_to(&mut self, target: &Self::Target) -> Result<()>;

    /// Release native resources; safe to call more than once
    fn dispose(&mut self);
}

impl DataWriter for SheetWriter {
    type Target = Path;

    fn write(&mut self) -> Result<()> {
        self.ensure_open()?;
        let target = self.target_path.clone().ok_or(ExportError::NoTarget)?;
        self.write_to(&target)
    }

    fn write_to(&mut self, target: &Path) -> Result<()> {
        self.ensure_open()?;
        self.store.save(&self.workbook, target)?;
        tracing::info!("Wrote document to {}", target.display());
        Ok(())
    }

    fn dispose(&mut self) {
        if !self.disposed {
            tracing::debug!("Disposing writer session");
        }
        self.release_session_handles();
    }
}
