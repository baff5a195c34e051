//! Per-session answer storage.
//!
//! An [`AnswerSheet`] is created together with an issued question sequence and
//! stays index-aligned with it for the whole session: it never shrinks, never
//! reorders, and is replaced wholesale when a new sequence is issued.

use crate::error::CoachError;

/// An ordered, mutable container of in-progress answers, one slot per issued
/// question. Unanswered slots hold the sentinel the sheet was created with
/// (`-1` for choice indices, `""` for free text).
#[derive(Debug, Clone)]
pub struct AnswerSheet<T> {
    slots: Vec<T>,
    sentinel: T,
}

impl<T: Clone + PartialEq> AnswerSheet<T> {
    /// Create a sheet of `len` slots, all filled with `sentinel`.
    pub fn new(len: usize, sentinel: T) -> Self {
        Self {
            slots: vec![sentinel.clone(); len],
            sentinel,
        }
    }

    /// Replace slot `index`, leaving every other slot untouched. Repeated
    /// identical writes are idempotent.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CoachError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CoachError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding something other than the sentinel.
    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| **s != self.sentinel).count()
    }

    /// Whether slot `index` has been answered.
    pub fn is_answered(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .map(|s| *s != self.sentinel)
            .unwrap_or(false)
    }

    /// Read-only copy of the current answers, for submission.
    pub fn snapshot(&self) -> Vec<T> {
        self.slots.clone()
    }
}
