//! Container types produced by the marshaller.
//!
//! Outputs are plain `ndarray` arrays so a downstream numerical engine can
//! consume them directly. [`MatrixOrder`] names how a flat buffer maps onto
//! the rows and columns of a matrix.
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Three-component real vector, e.g. a velocity.
pub type Vector3 = [f64; 3];

pub type RVector = Array1<f64>;
pub type CVector = Array1<Complex64>;
pub type CMatrix = Array2<Complex64>;

/// Storage order of a flat matrix buffer.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatrixOrder {
    /// Consecutive elements walk along a row (C / numpy default).
    #[default]
    RowMajor,
    /// Consecutive elements walk down a column (Fortran / Eigen default).
    ColumnMajor,
}

impl MatrixOrder {
    pub fn is_column_major(self) -> bool {
        self == MatrixOrder::ColumnMajor
    }
}

impl FromStr for MatrixOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "row_major" | "c" => Ok(MatrixOrder::RowMajor),
            "column_major" | "col_major" | "f" => Ok(MatrixOrder::ColumnMajor),
            _ => Err(format!(
                "Unknown matrix order: {}. Expected one of: row_major, column_major",
                s
            )),
        }
    }
}

impl fmt::Display for MatrixOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixOrder::RowMajor => write!(f, "row_major"),
            MatrixOrder::ColumnMajor => write!(f, "column_major"),
        }
    }
}
