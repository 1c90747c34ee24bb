//! Conversion of borrowed flat buffers into owned containers.
//!
//! Every operation validates the declared size against the buffer before
//! copying anything, so a call either returns the complete container or a
//! [`MarshalError`]. The source buffer is only borrowed for the duration of
//! the call.

use ndarray::{Array1, Array2, ShapeBuilder};
use num_complex::Complex64;

use crate::config::{MarshalConfig, MatrixSize};
use crate::error::MarshalError;
use crate::math::{CMatrix, CVector, RVector, Vector3};

pub type Result<T> = std::result::Result<T, MarshalError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferMarshaller {
    config: MarshalConfig,
}

impl BufferMarshaller {
    pub fn new(config: MarshalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    /// Split `buffer` into `group_count` vectors of `total_size / group_count` values each.
    pub fn partition_to_vectors(
        &self,
        buffer: &[f64],
        total_size: usize,
        group_count: usize,
    ) -> Result<Vec<RVector>> {
        if group_count == 0 {
            return Err(MarshalError::ZeroGroups);
        }
        if total_size % group_count != 0 {
            return Err(MarshalError::Indivisible {
                total: total_size,
                divisor: group_count,
            });
        }
        check_len(buffer.len(), total_size)?;

        let chunk = total_size / group_count;
        log::debug!(
            "Partitioning {} values into {} vectors of length {}",
            total_size,
            group_count,
            chunk
        );

        if chunk == 0 {
            return Ok((0..group_count).map(|_| Array1::from_vec(Vec::new())).collect());
        }
        Ok(buffer
            .chunks_exact(chunk)
            .map(|values| Array1::from_vec(values.to_vec()))
            .collect())
    }

    /// Split `buffer` into consecutive 3-component vectors.
    pub fn partition_to_triples(&self, buffer: &[f64], total_size: usize) -> Result<Vec<Vector3>> {
        if total_size % 3 != 0 {
            return Err(MarshalError::Indivisible {
                total: total_size,
                divisor: 3,
            });
        }
        check_len(buffer.len(), total_size)?;

        log::debug!("Partitioning {} values into {} triples", total_size, total_size / 3);
        Ok(buffer
            .chunks_exact(3)
            .map(|xyz| [xyz[0], xyz[1], xyz[2]])
            .collect())
    }

    pub fn view_as_vector(&self, buffer: &[f64], size: usize) -> Result<RVector> {
        check_len(buffer.len(), size)?;
        log::trace!("Copying real vector of length {}", size);
        Ok(Array1::from_vec(buffer.to_vec()))
    }

    pub fn view_as_complex_vector(&self, buffer: &[Complex64], size: usize) -> Result<CVector> {
        check_len(buffer.len(), size)?;
        log::trace!("Copying complex vector of length {}", size);
        Ok(Array1::from_vec(buffer.to_vec()))
    }

    /// Like [`view_as_complex_vector`](Self::view_as_complex_vector), for a buffer of
    /// interleaved `(re, im)` pairs. `size` counts complex values.
    pub fn view_as_complex_vector_interleaved(&self, buffer: &[f64], size: usize) -> Result<CVector> {
        let values = deinterleave(buffer, size)?;
        log::trace!("Copying interleaved complex vector of length {}", size);
        Ok(Array1::from_vec(values))
    }

    /// View `buffer` as a square matrix in the configured storage order.
    ///
    /// How `size` is read depends on [`MatrixSize`]: either the total number
    /// of elements (must be a perfect square) or the side length.
    pub fn view_as_complex_matrix(&self, buffer: &[Complex64], size: usize) -> Result<CMatrix> {
        let side = self.matrix_side(size)?;
        check_len(buffer.len(), side * side)?;
        self.build_matrix(buffer.to_vec(), side)
    }

    /// Like [`view_as_complex_matrix`](Self::view_as_complex_matrix), for a buffer of
    /// interleaved `(re, im)` pairs.
    pub fn view_as_complex_matrix_interleaved(&self, buffer: &[f64], size: usize) -> Result<CMatrix> {
        let side = self.matrix_side(size)?;
        let values = deinterleave(buffer, side * side)?;
        self.build_matrix(values, side)
    }

    fn matrix_side(&self, size: usize) -> Result<usize> {
        match self.config.matrix_size {
            MatrixSize::ElementCount => exact_sqrt(size).ok_or(MarshalError::NotSquare { size }),
            MatrixSize::SideLength => match size.checked_mul(size) {
                Some(_) => Ok(size),
                None => Err(MarshalError::SizeOverflow { size, factor: size }),
            },
        }
    }

    /// Number of elements a square matrix declared with `size` holds.
    pub(crate) fn matrix_len(&self, size: usize) -> Result<usize> {
        let side = self.matrix_side(size)?;
        Ok(side * side)
    }

    fn build_matrix(&self, values: Vec<Complex64>, side: usize) -> Result<CMatrix> {
        log::debug!(
            "Building {}x{} complex matrix ({})",
            side,
            side,
            self.config.matrix_order
        );
        let shape = (side, side).set_f(self.config.matrix_order.is_column_major());
        Ok(Array2::from_shape_vec(shape, values)?)
    }
}

fn check_len(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(MarshalError::LengthMismatch { expected, actual });
    }
    Ok(())
}

fn deinterleave(buffer: &[f64], size: usize) -> Result<Vec<Complex64>> {
    let expected = size
        .checked_mul(2)
        .ok_or(MarshalError::SizeOverflow { size, factor: 2 })?;
    check_len(buffer.len(), expected)?;
    Ok(buffer
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect())
}

/// Integer square root of `n` if `n` is a perfect square.
fn exact_sqrt(n: usize) -> Option<usize> {
    if n < 2 {
        return Some(n);
    }
    // Newton iteration from above converges to floor(sqrt(n)).
    let mut x = n;
    let mut y = n / 2 + 1;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    if x.checked_mul(x) == Some(n) {
        Some(x)
    } else {
        None
    }
}

pub fn partition_to_vectors(
    buffer: &[f64],
    total_size: usize,
    group_count: usize,
) -> Result<Vec<RVector>> {
    BufferMarshaller::default().partition_to_vectors(buffer, total_size, group_count)
}

pub fn partition_to_triples(buffer: &[f64], total_size: usize) -> Result<Vec<Vector3>> {
    BufferMarshaller::default().partition_to_triples(buffer, total_size)
}

pub fn view_as_vector(buffer: &[f64], size: usize) -> Result<RVector> {
    BufferMarshaller::default().view_as_vector(buffer, size)
}

pub fn view_as_complex_vector(buffer: &[Complex64], size: usize) -> Result<CVector> {
    BufferMarshaller::default().view_as_complex_vector(buffer, size)
}

pub fn view_as_complex_vector_interleaved(buffer: &[f64], size: usize) -> Result<CVector> {
    BufferMarshaller::default().view_as_complex_vector_interleaved(buffer, size)
}

pub fn view_as_complex_matrix(buffer: &[Complex64], size: usize) -> Result<CMatrix> {
    BufferMarshaller::default().view_as_complex_matrix(buffer, size)
}

pub fn view_as_complex_matrix_interleaved(buffer: &[f64], size: usize) -> Result<CMatrix> {
    BufferMarshaller::default().view_as_complex_matrix_interleaved(buffer, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deinterleave_reports_overflowing_size() {
        let err = deinterleave(&[], usize::MAX).unwrap_err();
        assert_eq!(err, MarshalError::SizeOverflow { size: usize::MAX, factor: 2 });
    }

    #[test]
    fn exact_sqrt_accepts_perfect_squares_only() {
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(1), Some(1));
        assert_eq!(exact_sqrt(4), Some(2));
        assert_eq!(exact_sqrt(144), Some(12));
        assert_eq!(exact_sqrt(2), None);
        assert_eq!(exact_sqrt(15), None);
        assert_eq!(exact_sqrt(17), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn exact_sqrt_handles_large_squares() {
        let side = 3_037_000_499usize;
        assert_eq!(exact_sqrt(side * side), Some(side));
        assert_eq!(exact_sqrt(side * side + 1), None);
        assert_eq!(exact_sqrt(usize::MAX), None);
    }

    #[test]
    fn deinterleave_pairs_real_and_imaginary_parts() {
        let values = deinterleave(&[1.0, -1.0, 2.5, 0.5], 2).unwrap();
        assert_eq!(values, vec![Complex64::new(1.0, -1.0), Complex64::new(2.5, 0.5)]);
    }

    #[test]
    fn deinterleave_rejects_odd_buffers() {
        let err = deinterleave(&[1.0, 2.0, 3.0], 2).unwrap_err();
        assert_eq!(err, MarshalError::LengthMismatch { expected: 4, actual: 3 });
    }
}
