//! Build-time check guards.
//!
//! Each guard validates one family of conditions and compiles to a no-op
//! when the matching Cargo feature is disabled, so accessors carry no
//! scattered conditionals and the unchecked profile pays nothing. Call
//! sites are identical in both profiles; with a guard compiled out the
//! violating condition is simply not detected.

use crate::error::Error;

/// Rejects an index outside `[0, len)`. Compiled out without `bounds-checks`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if cfg!(feature = "bounds-checks") && index >= len {
        return Err(Error::OutOfBounds { index, len });
    }
    Ok(())
}

/// Rejects a zero-length operand. Compiled out without `empty-checks`.
#[inline]
pub(crate) fn check_nonempty(len: usize) -> Result<(), Error> {
    if cfg!(feature = "empty-checks") && len == 0 {
        return Err(Error::EmptyElement);
    }
    Ok(())
}

/// Rejects two lengths that must agree but do not. Compiled out without
/// `dimension-checks`.
#[inline]
pub(crate) fn check_same_length(expected: usize, actual: usize) -> Result<(), Error> {
    if cfg!(feature = "dimension-checks") && expected != actual {
        return Err(Error::BadDimensions { expected, actual });
    }
    Ok(())
}

/// Rejects a buffer whose length does not match `rows * cols`. Compiled out
/// without `dimension-checks`.
#[inline]
pub(crate) fn check_buffer_len(rows: usize, cols: usize, len: usize) -> Result<(), Error> {
    if cfg!(feature = "dimension-checks") && rows * cols != len {
        return Err(Error::BadDimensions {
            expected: rows * cols,
            actual: len,
        });
    }
    Ok(())
}
