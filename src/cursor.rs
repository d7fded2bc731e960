//! Pull-based stepping shared by traversal and filter iterators.

use std::iter::{FusedIterator, Peekable};

use crate::filter::{FilterIterator, Predicate};
use crate::types::{GraphError, GraphResult};

/// An explicit `has_next` / `next_value` cursor.
///
/// Unlike [`Iterator`], both steps are fallible: a traversal reports
/// [`GraphError::StaleIterator`] after the graph changes, and `next_value`
/// reports [`GraphError::Exhausted`] once nothing is left.
pub trait Cursor {
    /// The value produced by each step.
    type Item;

    /// Whether another value is available.
    fn has_next(&mut self) -> GraphResult<bool>;

    /// Produce the next value.
    fn next_value(&mut self) -> GraphResult<Self::Item>;

    /// Adapt into a std iterator of results. It ends when the cursor is
    /// exhausted and fuses after the first error.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values {
            cursor: self,
            done: false,
        }
    }

    /// Keep only values accepted by `predicate`.
    fn filter_by(self, predicate: Predicate<Self::Item>) -> FilterIterator<Self>
    where
        Self: Sized,
    {
        FilterIterator::new(self, predicate)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> GraphResult<bool> {
        (**self).has_next()
    }

    fn next_value(&mut self) -> GraphResult<Self::Item> {
        (**self).next_value()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&mut self) -> GraphResult<bool> {
        (**self).has_next()
    }

    fn next_value(&mut self) -> GraphResult<Self::Item> {
        (**self).next_value()
    }
}

/// Std iterator over a cursor's results. See [`Cursor::values`].
#[derive(Debug)]
pub struct Values<C> {
    cursor: C,
    done: bool,
}

impl<C> Values<C> {
    /// Recover the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Values<C> {
    type Item = GraphResult<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.has_next() {
            Ok(true) => {
                let step = self.cursor.next_value();
                self.done = step.is_err();
                Some(step)
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<C: Cursor> FusedIterator for Values<C> {}

/// Adapts any std iterator into a [`Cursor`]. It never goes stale.
pub struct IterCursor<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wrap an iterator.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: iter.into_iter().peekable(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> GraphResult<bool> {
        Ok(self.inner.peek().is_some())
    }

    fn next_value(&mut self) -> GraphResult<I::Item> {
        self.inner.next().ok_or(GraphError::Exhausted)
    }
}
