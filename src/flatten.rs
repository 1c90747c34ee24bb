//! Inverses of the marshaller operations.
//!
//! Each function writes a container back into the flat layout the
//! corresponding `view_as_*` / `partition_to_*` call accepts.

use num_complex::Complex64;

use crate::math::{CMatrix, CVector, MatrixOrder, RVector, Vector3};

pub fn flatten_vectors(vectors: &[RVector]) -> Vec<f64> {
    let total = vectors.iter().map(|v| v.len()).sum();
    let mut out = Vec::with_capacity(total);
    for v in vectors {
        out.extend(v.iter().copied());
    }
    out
}

pub fn flatten_triples(triples: &[Vector3]) -> Vec<f64> {
    triples.iter().flat_map(|xyz| xyz.iter().copied()).collect()
}

pub fn flatten_vector(vector: &RVector) -> Vec<f64> {
    vector.to_vec()
}

pub fn flatten_complex_vector(vector: &CVector) -> Vec<Complex64> {
    vector.to_vec()
}

/// Write complex values as consecutive `(re, im)` pairs.
pub fn interleave_complex(values: &[Complex64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() * 2);
    for z in values {
        out.push(z.re);
        out.push(z.im);
    }
    out
}

/// Flatten in `order`, independent of the matrix's own memory layout.
pub fn flatten_complex_matrix(matrix: &CMatrix, order: MatrixOrder) -> Vec<Complex64> {
    match order {
        MatrixOrder::RowMajor => matrix.iter().copied().collect(),
        MatrixOrder::ColumnMajor => matrix.t().iter().copied().collect(),
    }
}
