//! In-memory settings-document fixture.

use crate::io::{IoResult, SettingsDocumentIo};
use std::cell::{Cell, RefCell};

/// Holds the document in memory; the transport counterpart of an
/// in-memory database. Single-threaded by construction, matching the
/// core's synchronous model.
pub struct MemorySettingsIo {
    document: RefCell<String>,
    write_count: Cell<usize>,
}

impl MemorySettingsIo {
    /// Creates a fixture seeded with `document`.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(document.into()),
            write_count: Cell::new(0),
        }
    }

    /// Returns the current document text.
    pub fn document(&self) -> String {
        self.document.borrow().clone()
    }

    /// Returns how many writes have been accepted.
    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }
}

impl SettingsDocumentIo for MemorySettingsIo {
    fn read(&self) -> IoResult<String> {
        Ok(self.document.borrow().clone())
    }

    fn write(&self, text: &str) -> IoResult<()> {
        *self.document.borrow_mut() = text.to_string();
        self.write_count.set(self.write_count.get() + 1);
        Ok(())
    }
}
