//! Non-owning vectors aliasing one row or column of a matrix.
//!
//! A view is a pure forwarding adapter: it holds a handle to the parent's
//! storage plus the fixed row or column index, performs no allocation, and
//! forwards every element access to the parent's 2-D path. The handle keeps
//! the storage alive, so a view cannot outlive its parent's buffer. The
//! view's length is captured at construction and is not revalidated
//! afterwards.

use std::fmt;

use crate::checks;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::vector::{Orientation, Vector};

/// Aliases one row of a parent matrix. Created by [`Matrix::row`].
pub struct RowView<T> {
    parent: Matrix<T>,
    row: usize,
    len: usize,
}

/// Aliases one column of a parent matrix. Created by [`Matrix::col`].
pub struct ColView<T> {
    parent: Matrix<T>,
    col: usize,
    len: usize,
}

impl<T> RowView<T> {
    pub(crate) fn new(parent: Matrix<T>, row: usize, len: usize) -> Self {
        Self { parent, row, len }
    }

    /// The row of the parent this view is fixed to.
    pub fn row_index(&self) -> usize {
        self.row
    }
}

impl<T> ColView<T> {
    pub(crate) fn new(parent: Matrix<T>, col: usize, len: usize) -> Self {
        Self { parent, col, len }
    }

    /// The column of the parent this view is fixed to.
    pub fn col_index(&self) -> usize {
        self.col
    }
}

impl<T: Copy> Vector<T> for RowView<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn orientation(&self) -> Orientation {
        Orientation::Row
    }

    fn at(&self, index: usize) -> Result<T, Error> {
        checks::check_index(index, self.len)?;
        self.parent.at(self.row, index)
    }

    fn set(&self, index: usize, value: T) -> Result<(), Error> {
        checks::check_index(index, self.len)?;
        self.parent.set(self.row, index, value)
    }

    fn to_vec(&self) -> Vec<T> {
        let inner = self.parent.inner.borrow();
        let start = self.row * inner.cols;
        inner.data[start..start + self.len].to_vec()
    }
}

impl<T: Copy> Vector<T> for ColView<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn orientation(&self) -> Orientation {
        Orientation::Column
    }

    fn at(&self, index: usize) -> Result<T, Error> {
        checks::check_index(index, self.len)?;
        self.parent.at(index, self.col)
    }

    fn set(&self, index: usize, value: T) -> Result<(), Error> {
        checks::check_index(index, self.len)?;
        self.parent.set(index, self.col, value)
    }

    fn to_vec(&self) -> Vec<T> {
        let inner = self.parent.inner.borrow();
        (0..self.len)
            .map(|i| inner.data[i * inner.cols + self.col])
            .collect()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for RowView<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RowView")
            .field("row", &self.row)
            .field("data", &self.to_vec())
            .finish()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ColView<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ColView")
            .field("col", &self.col)
            .field("data", &self.to_vec())
            .finish()
    }
}
