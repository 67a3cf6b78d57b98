//! Owning matrix type over shared row-major storage.
//!
//! `Matrix<T>` is a handle: the buffer, shape, and (when the
//! `sticky-compute` feature is enabled) the invalidation mask live behind a
//! reference-counted cell shared with every view created from the matrix.
//! A view therefore keeps the storage alive and can never dangle; there is
//! no way to build a view against a transient copy of its parent.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_traits::{One, Zero};

use crate::checks;
use crate::error::Error;
use crate::vector::{ColView, RowView};

pub(crate) struct Inner<T> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    #[cfg(feature = "sticky-compute")]
    pub(crate) sticky_mask: u64,
}

impl<T> Inner<T> {
    fn new(data: Vec<T>, rows: usize, cols: usize) -> Self {
        Self {
            data,
            rows,
            cols,
            #[cfg(feature = "sticky-compute")]
            sticky_mask: 0,
        }
    }

    /// Records a mutation. Any write through any handle of this storage
    /// invalidates cached derived properties.
    #[inline]
    pub(crate) fn touch(&mut self) {
        #[cfg(feature = "sticky-compute")]
        {
            self.sticky_mask = 0;
        }
    }
}

/// A row-major matrix of `Copy` elements.
///
/// Shape invariant: `data.len() == rows * cols`. Zero-sized shapes are
/// permitted. Accessors linear-index the buffer as `row * cols + col` and
/// validate the linear index when the `bounds-checks` feature is enabled;
/// without it no validation is performed and an out-of-range access panics
/// on the underlying buffer instead of returning an error.
pub struct Matrix<T> {
    pub(crate) inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Copy> Matrix<T> {
    /// Builds a matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns `BadDimensions` when the buffer length does not equal
    /// `rows * cols` (compiled out without `dimension-checks`).
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, Error> {
        let (rows, cols) = shape;
        checks::check_buffer_len(rows, cols, data.len())?;
        log::trace!("allocating {}x{} matrix", rows, cols);
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Same as [`Matrix::from_shape_vec`] with the shape spelled out.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Internal constructor for buffers whose length is correct by
    /// construction.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::new(data, rows, cols))),
        }
    }

    /// Fills a `rows x cols` matrix with copies of `value`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        log::trace!("allocating {}x{} matrix", rows, cols);
        Self::from_parts(rows, cols, vec![value; rows * cols])
    }

    pub fn rows(&self) -> usize {
        self.inner.borrow().rows
    }

    pub fn cols(&self) -> usize {
        self.inner.borrow().cols
    }

    pub fn shape(&self) -> (usize, usize) {
        let inner = self.inner.borrow();
        (inner.rows, inner.cols)
    }

    /// Number of stored elements (`rows * cols`).
    pub fn element_count(&self) -> usize {
        self.inner.borrow().data.len()
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the linear index `row * cols + col` falls
    /// outside the buffer (compiled out without `bounds-checks`).
    pub fn at(&self, row: usize, col: usize) -> Result<T, Error> {
        let inner = self.inner.borrow();
        let index = row * inner.cols + col;
        checks::check_index(index, inner.data.len())?;
        Ok(inner.data[index])
    }

    /// Stores `value` at `(row, col)`.
    ///
    /// Clears the sticky-compute mask of this storage when that feature is
    /// enabled.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the linear index `row * cols + col` falls
    /// outside the buffer (compiled out without `bounds-checks`).
    pub fn set(&self, row: usize, col: usize, value: T) -> Result<(), Error> {
        let mut inner = self.inner.borrow_mut();
        let index = row * inner.cols + col;
        checks::check_index(index, inner.data.len())?;
        inner.data[index] = value;
        inner.touch();
        Ok(())
    }

    /// Creates a view aliasing row `index`.
    ///
    /// The view shares this matrix's storage: writes through either side are
    /// visible through the other. Its length is the column count captured
    /// here; reshaping the storage afterwards is not supported.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `index >= rows` (compiled out without
    /// `bounds-checks`).
    pub fn row(&self, index: usize) -> Result<RowView<T>, Error> {
        let (rows, cols) = self.shape();
        checks::check_index(index, rows)?;
        log::debug!("row view {} of {}x{} matrix", index, rows, cols);
        Ok(RowView::new(self.clone(), index, cols))
    }

    /// Creates a view aliasing column `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `index >= cols` (compiled out without
    /// `bounds-checks`).
    pub fn col(&self, index: usize) -> Result<ColView<T>, Error> {
        let (rows, cols) = self.shape();
        checks::check_index(index, cols)?;
        log::debug!("column view {} of {}x{} matrix", index, rows, cols);
        Ok(ColView::new(self.clone(), index, rows))
    }

    /// Deep copy with fresh storage, unaliased from this matrix and its
    /// views.
    pub fn duplicate(&self) -> Self {
        let inner = self.inner.borrow();
        Self::from_parts(inner.rows, inner.cols, inner.data.clone())
    }

    /// Element-wise conversion into a matrix of another element type.
    ///
    /// Always allocates fresh storage and copies every element through
    /// `U::from`; this is the crate's only element-type-changing mechanism.
    pub fn cast<U>(&self) -> Matrix<U>
    where
        U: Copy + From<T>,
    {
        let inner = self.inner.borrow();
        log::debug!("casting {}x{} matrix", inner.rows, inner.cols);
        let data = inner.data.iter().map(|&v| U::from(v)).collect();
        Matrix::from_parts(inner.rows, inner.cols, data)
    }

    /// Snapshot of the buffer in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.borrow().data.clone()
    }
}

impl<T: Copy + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T: Copy + One> Matrix<T> {
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::one())
    }
}

#[cfg(feature = "sticky-compute")]
impl<T> Matrix<T> {
    /// Current sticky-compute mask of this storage.
    pub fn sticky_mask(&self) -> u64 {
        self.inner.borrow().sticky_mask
    }

    /// Marks bit `bit` as computed. The mark survives reads and is cleared
    /// by the next write through any handle of this storage.
    pub fn set_sticky_bit(&self, bit: u32) {
        self.inner.borrow_mut().sticky_mask |= 1 << bit;
    }

    pub fn test_sticky_bit(&self, bit: u32) -> bool {
        self.inner.borrow().sticky_mask & (1 << bit) != 0
    }

    pub fn clear_sticky_mask(&self) {
        self.inner.borrow_mut().sticky_mask = 0;
    }
}

/// Cloning produces a second handle to the SAME storage; use
/// [`Matrix::duplicate`] for an unaliased copy.
impl<T> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.inner.borrow();
        let b = other.inner.borrow();
        a.rows == b.rows && a.cols == b.cols && a.data == b.data
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Matrix")
            .field("rows", &inner.rows)
            .field("cols", &inner.cols)
            .field("data", &inner.data)
            .finish()
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.borrow();
        for row in 0..inner.rows {
            write!(f, "[")?;
            for col in 0..inner.cols {
                write!(f, "{}", inner.data[row * inner.cols + col])?;
                if col + 1 != inner.cols {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
