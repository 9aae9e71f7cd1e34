use alloc::{collections::TryReserveError, string::String};

/// One reusable string slot.
///
/// A slot is either absent or holds a non-empty string. Assigning overwrites the
/// previous contents in place and keeps the allocation, so a parser walking a
/// large file with similarly sized lines stops allocating after the first few.
///
/// Assigning the empty string releases the allocation and leaves the slot
/// absent. Callers that must distinguish "empty" from "absent" therefore reject
/// empty input before (or after) calling [`Slot::assign`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Slot {
    buf: Option<String>,
}

impl Slot {
    /// Creates an absent slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: None }
    }

    /// Replaces the slot's contents with `text`.
    ///
    /// Returns `Ok(None)` when `text` is empty and the slot was released, or the
    /// stored buffer otherwise.
    ///
    /// # Errors
    ///
    /// Returns the reservation error when the buffer cannot grow to fit `text`.
    /// The slot is released in that case.
    pub fn assign(&mut self, text: &str) -> Result<Option<&mut String>, TryReserveError> {
        if text.is_empty() {
            self.buf = None;
            return Ok(None);
        }

        // Taken out so a failed reservation leaves the slot absent.
        let mut buf = self.buf.take().unwrap_or_default();
        buf.clear();
        buf.try_reserve(text.len())?;
        buf.push_str(text);
        Ok(Some(self.buf.insert(buf)))
    }

    /// The current contents, or `None` when absent.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.buf.as_deref()
    }

    /// Returns `true` if the slot holds nothing.
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.buf.is_none()
    }

    /// Bytes currently reserved by the slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, String::capacity)
    }

    /// Drops the contents and frees the allocation.
    pub fn release(&mut self) {
        self.buf = None;
    }
}
