//! Lazy narrowing of a cursor's output to predicate-accepted values.

use std::fmt;

use crate::cursor::Cursor;
use crate::types::{GraphError, GraphResult};

use super::Predicate;

/// Wraps a source cursor and yields only values its predicate accepts,
/// in source order.
///
/// `has_next` pulls from the source until it buffers an accepted value or
/// the source runs dry; repeated calls do not pull again. Errors from the
/// source (such as [`GraphError::StaleIterator`]) pass through unchanged.
/// To restart, wrap a fresh source.
pub struct FilterIterator<C: Cursor> {
    source: C,
    predicate: Predicate<C::Item>,
    buffered: Option<C::Item>,
}

impl<C: Cursor> FilterIterator<C> {
    /// Wrap `source`, keeping values accepted by `predicate`.
    pub fn new(source: C, predicate: Predicate<C::Item>) -> Self {
        Self {
            source,
            predicate,
            buffered: None,
        }
    }

    /// The predicate in use.
    pub fn predicate(&self) -> &Predicate<C::Item> {
        &self.predicate
    }

    /// Recover the source cursor. A buffered value is discarded.
    pub fn into_inner(self) -> C {
        self.source
    }
}

impl<C: Cursor> Cursor for FilterIterator<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> GraphResult<bool> {
        if self.buffered.is_some() {
            return Ok(true);
        }
        while self.source.has_next()? {
            let value = self.source.next_value()?;
            if self.predicate.accept(&value) {
                self.buffered = Some(value);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn next_value(&mut self) -> GraphResult<C::Item> {
        if let Some(value) = self.buffered.take() {
            return Ok(value);
        }
        if self.has_next()? {
            if let Some(value) = self.buffered.take() {
                return Ok(value);
            }
        }
        Err(GraphError::Exhausted)
    }
}

impl<C: Cursor + fmt::Debug> fmt::Debug for FilterIterator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterIterator")
            .field("source", &self.source)
            .field("predicate", &self.predicate)
            .field("buffered", &self.buffered.is_some())
            .finish()
    }
}
