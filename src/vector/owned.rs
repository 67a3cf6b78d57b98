//! Owned vector kinds.
//!
//! `RowVector` and `ColVector` differ only in how the free dimension maps
//! onto the matrix shape: a row vector is backed by `1 x n` storage, a
//! column vector by `n x 1`. Both exclusively own their buffer.

use std::fmt;

use num_traits::{One, Zero};

use crate::error::Error;
use crate::matrix::Matrix;
use crate::vector::{Orientation, Vector};

/// A vector laid out as a single matrix row.
pub struct RowVector<T> {
    mat: Matrix<T>,
}

/// A vector laid out as a single matrix column.
pub struct ColVector<T> {
    mat: Matrix<T>,
}

impl<T: Copy> RowVector<T> {
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            mat: Matrix::from_parts(1, len, values),
        }
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    pub fn from_elem(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self
    where
        T: Zero,
    {
        Self::from_elem(len, T::zero())
    }

    pub fn ones(len: usize) -> Self
    where
        T: One,
    {
        Self::from_elem(len, T::one())
    }

    /// Element-wise conversion from any vector of another element type.
    ///
    /// Always allocates a fresh buffer of the source's length and copies
    /// element-by-element through `T::from`; views are accepted as sources
    /// and are snapshotted, never aliased.
    pub fn cast<S>(source: &impl Vector<S>) -> Self
    where
        S: Copy,
        T: From<S>,
    {
        log::debug!("casting {}-element vector to row vector", source.len());
        Self::from_vec(source.to_vec().into_iter().map(T::from).collect())
    }
}

impl<T: Copy> ColVector<T> {
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            mat: Matrix::from_parts(len, 1, values),
        }
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    pub fn from_elem(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self
    where
        T: Zero,
    {
        Self::from_elem(len, T::zero())
    }

    pub fn ones(len: usize) -> Self
    where
        T: One,
    {
        Self::from_elem(len, T::one())
    }

    /// Element-wise conversion from any vector of another element type.
    /// See [`RowVector::cast`].
    pub fn cast<S>(source: &impl Vector<S>) -> Self
    where
        S: Copy,
        T: From<S>,
    {
        log::debug!("casting {}-element vector to column vector", source.len());
        Self::from_vec(source.to_vec().into_iter().map(T::from).collect())
    }
}

impl<T: Copy> Vector<T> for RowVector<T> {
    fn len(&self) -> usize {
        self.mat.cols()
    }

    fn orientation(&self) -> Orientation {
        Orientation::Row
    }

    fn at(&self, index: usize) -> Result<T, Error> {
        self.mat.at(0, index)
    }

    fn set(&self, index: usize, value: T) -> Result<(), Error> {
        self.mat.set(0, index, value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.mat.to_vec()
    }
}

impl<T: Copy> Vector<T> for ColVector<T> {
    fn len(&self) -> usize {
        self.mat.rows()
    }

    fn orientation(&self) -> Orientation {
        Orientation::Column
    }

    fn at(&self, index: usize) -> Result<T, Error> {
        self.mat.at(index, 0)
    }

    fn set(&self, index: usize, value: T) -> Result<(), Error> {
        self.mat.set(index, 0, value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.mat.to_vec()
    }
}

#[cfg(feature = "sticky-compute")]
impl<T> RowVector<T> {
    pub fn sticky_mask(&self) -> u64 {
        self.mat.sticky_mask()
    }

    pub fn set_sticky_bit(&self, bit: u32) {
        self.mat.set_sticky_bit(bit)
    }

    pub fn test_sticky_bit(&self, bit: u32) -> bool {
        self.mat.test_sticky_bit(bit)
    }

    pub fn clear_sticky_mask(&self) {
        self.mat.clear_sticky_mask()
    }
}

#[cfg(feature = "sticky-compute")]
impl<T> ColVector<T> {
    pub fn sticky_mask(&self) -> u64 {
        self.mat.sticky_mask()
    }

    pub fn set_sticky_bit(&self, bit: u32) {
        self.mat.set_sticky_bit(bit)
    }

    pub fn test_sticky_bit(&self, bit: u32) -> bool {
        self.mat.test_sticky_bit(bit)
    }

    pub fn clear_sticky_mask(&self) {
        self.mat.clear_sticky_mask()
    }
}

/// An owned row vector is a `1 x n` matrix; the conversion reuses its
/// storage without copying.
impl<T> From<RowVector<T>> for Matrix<T> {
    fn from(vector: RowVector<T>) -> Self {
        vector.mat
    }
}

/// An owned column vector is an `n x 1` matrix; the conversion reuses its
/// storage without copying.
impl<T> From<ColVector<T>> for Matrix<T> {
    fn from(vector: ColVector<T>) -> Self {
        vector.mat
    }
}

impl<T: Copy> From<Vec<T>> for RowVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Copy> From<Vec<T>> for ColVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Copy> FromIterator<T> for RowVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Copy> FromIterator<T> for ColVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Copy + PartialEq> PartialEq for RowVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.mat == other.mat
    }
}

impl<T: Copy + PartialEq> PartialEq for ColVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.mat == other.mat
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for RowVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("RowVector").field(&self.to_vec()).finish()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ColVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ColVector").field(&self.to_vec()).finish()
    }
}

impl<T: Copy + fmt::Display> fmt::Display for RowVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_elements(f, &self.to_vec())
    }
}

impl<T: Copy + fmt::Display> fmt::Display for ColVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_elements(f, &self.to_vec())
    }
}

fn write_elements<T: fmt::Display>(f: &mut fmt::Formatter, values: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (idx, value) in values.iter().enumerate() {
        write!(f, "{}", value)?;
        if idx + 1 != values.len() {
            write!(f, ", ")?;
        }
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_vector_populates_single_row_shape() {
        let v = RowVector::from_vec(vec![1, 2, 3]);
        assert_eq!(v.shape(), (1, 3));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn col_vector_populates_single_col_shape() {
        let v = ColVector::from_vec(vec![1, 2, 3]);
        assert_eq!(v.shape(), (3, 1));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn one_dim_access_maps_into_buffer() {
        let v = ColVector::from_vec(vec![10, 20, 30]);
        assert_eq!(v.at(1).unwrap(), 20);
        v.set(1, 25).unwrap();
        assert_eq!(v.at(1).unwrap(), 25);
    }
}
