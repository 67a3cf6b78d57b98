//! Integration tests for the owning Matrix, RowVector, and ColVector types.

use lamina::vector::{ColVector, RowVector, Vector};
use lamina::{Error, Matrix, Orientation};

// ---------------------------------------------------------------------------
// Matrix construction and shape
// ---------------------------------------------------------------------------

#[test]
fn matrix_from_shape_vec_and_shape() {
    let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.element_count(), 6);
}

#[test]
#[cfg(feature = "dimension-checks")]
fn matrix_shape_mismatch_errors() {
    let result = Matrix::from_shape_vec((2, 3), vec![1.0f32, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        Error::BadDimensions {
            expected: 6,
            actual: 3
        }
    );
}

#[test]
fn matrix_zero_sized_shapes_allowed() {
    let m: Matrix<f64> = Matrix::zeros(0, 0);
    assert_eq!(m.shape(), (0, 0));
    let n: Matrix<f64> = Matrix::from_shape_vec((0, 5), vec![]).unwrap();
    assert_eq!(n.element_count(), 0);
}

#[test]
fn matrix_zeros_ones_from_elem() {
    let z: Matrix<f32> = Matrix::zeros(2, 2);
    let o: Matrix<f32> = Matrix::ones(2, 2);
    let e = Matrix::from_elem(2, 2, 7i64);
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(z.at(r, c).unwrap(), 0.0);
            assert_eq!(o.at(r, c).unwrap(), 1.0);
            assert_eq!(e.at(r, c).unwrap(), 7);
        }
    }
}

// ---------------------------------------------------------------------------
// Matrix element access
// ---------------------------------------------------------------------------

#[test]
fn matrix_set_then_at_round_trip_all_coordinates() {
    let m: Matrix<i32> = Matrix::zeros(3, 4);
    for r in 0..3 {
        for c in 0..4 {
            let v = (r * 10 + c) as i32;
            m.set(r, c, v).unwrap();
            assert_eq!(m.at(r, c).unwrap(), v, "round trip at ({}, {})", r, c);
        }
    }
}

#[test]
#[cfg(feature = "bounds-checks")]
fn matrix_out_of_range_linear_index_errors() {
    let m: Matrix<i32> = Matrix::zeros(2, 3);
    // Linear index 2*3 + 0 = 6 is the first invalid one
    assert_eq!(
        m.at(2, 0).unwrap_err(),
        Error::OutOfBounds { index: 6, len: 6 }
    );
    assert!(m.set(2, 0, 1).is_err());
}

#[test]
fn matrix_access_is_linear_indexed() {
    // The bounds contract is on the linear index row * cols + col, so a
    // column overflow that stays inside the buffer wraps into the next row.
    let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m.at(0, 5).unwrap(), m.at(1, 2).unwrap());
}

#[test]
#[cfg(not(feature = "bounds-checks"))]
#[should_panic]
fn matrix_out_of_range_is_undetected_when_unchecked() {
    // Without bounds-checks the library performs no validation of its own;
    // the underlying buffer access is what gives out.
    let m: Matrix<i32> = Matrix::zeros(2, 3);
    let _ = m.at(2, 0);
}

#[test]
fn matrix_equality_compares_shape_and_elements() {
    let a = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let c = Matrix::from_shape_vec((4, 1), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c, "same buffer under a different shape is not equal");
}

#[test]
fn matrix_duplicate_detaches_storage() {
    let m = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let d = m.duplicate();
    m.set(0, 0, 99).unwrap();
    assert_eq!(d.at(0, 0).unwrap(), 1, "duplicate must not alias the source");
}

// ---------------------------------------------------------------------------
// Owned vectors
// ---------------------------------------------------------------------------

#[test]
fn row_vector_shape_and_orientation() {
    let v = RowVector::from_vec(vec![1, 2, 3]);
    assert_eq!(v.len(), 3);
    assert_eq!(v.shape(), (1, 3));
    assert_eq!(v.orientation(), Orientation::Row);
}

#[test]
fn col_vector_shape_and_orientation() {
    let v = ColVector::from_vec(vec![1, 2, 3]);
    assert_eq!(v.len(), 3);
    assert_eq!(v.shape(), (3, 1));
    assert_eq!(v.orientation(), Orientation::Column);
}

#[test]
fn vector_set_then_at_round_trip() {
    let v: RowVector<i32> = RowVector::zeros(5);
    for i in 0..5 {
        v.set(i, i as i32 * 2).unwrap();
    }
    for i in 0..5 {
        assert_eq!(v.at(i).unwrap(), i as i32 * 2);
    }
}

#[test]
#[cfg(feature = "bounds-checks")]
fn vector_out_of_range_index_errors() {
    let v = RowVector::from_vec(vec![1, 2, 3]);
    assert_eq!(
        v.at(3).unwrap_err(),
        Error::OutOfBounds { index: 3, len: 3 }
    );
    let c = ColVector::from_vec(vec![1, 2, 3]);
    assert!(c.set(3, 0).is_err());
}

#[test]
#[cfg(feature = "bounds-checks")]
fn vector_two_dim_fixed_coordinate_must_be_zero() {
    let r = RowVector::from_vec(vec![1, 2, 3]);
    assert_eq!(r.at2(0, 1).unwrap(), 2);
    assert!(r.at2(1, 1).is_err(), "row vector rejects row != 0");

    let c = ColVector::from_vec(vec![1, 2, 3]);
    assert_eq!(c.at2(1, 0).unwrap(), 2);
    assert!(c.at2(1, 1).is_err(), "column vector rejects col != 0");
    assert!(c.set2(0, 1, 9).is_err());
}

#[test]
fn vector_two_dim_delegates_to_free_coordinate() {
    let r = RowVector::from_vec(vec![10, 20, 30]);
    r.set2(0, 2, 33).unwrap();
    assert_eq!(r.at(2).unwrap(), 33);

    let c = ColVector::from_vec(vec![10, 20, 30]);
    c.set2(2, 0, 33).unwrap();
    assert_eq!(c.at(2).unwrap(), 33);
}

#[test]
fn vector_from_iterator_and_display() {
    let v: RowVector<i32> = (1..=3).collect();
    assert_eq!(v.to_vec(), vec![1, 2, 3]);
    assert_eq!(format!("{}", v), "[1, 2, 3]");
}

// ---------------------------------------------------------------------------
// Sticky-compute mask
// ---------------------------------------------------------------------------

#[test]
#[cfg(feature = "sticky-compute")]
fn sticky_bit_survives_reads_and_clears_on_write() {
    let m: Matrix<f64> = Matrix::zeros(2, 2);
    m.set_sticky_bit(0);
    assert!(m.test_sticky_bit(0));
    let _ = m.at(1, 1).unwrap();
    assert!(m.test_sticky_bit(0), "reads must not clear the mask");
    m.set(1, 1, 3.0).unwrap();
    assert!(!m.test_sticky_bit(0), "writes must clear the mask");
    assert_eq!(m.sticky_mask(), 0);
}

#[test]
#[cfg(feature = "sticky-compute")]
fn sticky_mask_is_per_storage() {
    let a: RowVector<f64> = RowVector::zeros(3);
    let b: RowVector<f64> = RowVector::zeros(3);
    a.set_sticky_bit(1);
    assert!(a.test_sticky_bit(1));
    assert!(!b.test_sticky_bit(1), "masks do not cross storage boundaries");
    b.set(0, 1.0).unwrap();
    assert!(a.test_sticky_bit(1));
}
