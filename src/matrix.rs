//! Dense dynamically-sized matrix.
//!
//! Row-major storage with explicit shape. All shape-dependent operations
//! are guarded: incompatible operands fail with a typed error instead of
//! producing a malformed result.

use crate::precision;
use crate::{GeomError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense 2D matrix of f64 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    // Row-major: entry (i, j) lives at data[i * cols + j]
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a sequence of rows.
    ///
    /// Fails with `RaggedRows` when the rows have unequal lengths or the
    /// input is empty.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let expected = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => {
                return Err(GeomError::RaggedRows {
                    row: 0,
                    expected: 1,
                    found: 0,
                })
            }
        };
        let mut data = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GeomError::RaggedRows {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols: expected,
            data,
        })
    }

    /// Creates a zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates an n-by-n identity matrix.
    pub fn identity(n: usize) -> Matrix {
        let mut m = Matrix::zero(n, n);
        for i in 0..n {
            m.set_value(i, i, 1.0);
        }
        m
    }

    /// Returns the number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix is square.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets the entry at (row, col). 0-indexed.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets the entry at (row, col). 0-indexed.
    #[inline]
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Standard matrix product.
    ///
    /// Fails with `ShapeMismatch` unless this matrix's column count equals
    /// the other's row count.
    pub fn multiplied(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(GeomError::ShapeMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut result = Matrix::zero(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.value(i, k) * other.value(k, j);
                }
                result.set_value(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Returns the transposed matrix.
    pub fn transposed(&self) -> Matrix {
        let mut result = Matrix::zero(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.set_value(j, i, self.value(i, j));
            }
        }
        result
    }

    /// Computes the determinant by Gaussian elimination with partial
    /// pivoting. Fails with `ShapeMismatch` for non-square matrices.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(GeomError::ShapeMismatch(format!(
                "determinant requires a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut det = 1.0;
        for col in 0..n {
            let pivot_row = Self::max_pivot_row(&work, col);
            let pivot = work.value(pivot_row, col);
            if pivot.abs() <= precision::SINGULAR {
                return Ok(0.0);
            }
            if pivot_row != col {
                work.swap_rows(pivot_row, col);
                det = -det;
            }
            det *= pivot;
            for row in (col + 1)..n {
                let factor = work.value(row, col) / pivot;
                for j in col..n {
                    let v = work.value(row, j) - factor * work.value(col, j);
                    work.set_value(row, j, v);
                }
            }
        }
        Ok(det)
    }

    /// Computes the inverse by Gauss-Jordan elimination with partial
    /// pivoting.
    ///
    /// Fails with `ShapeMismatch` for non-square matrices and `Singular`
    /// when a pivot magnitude falls below [`precision::SINGULAR`].
    pub fn inverted(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(GeomError::ShapeMismatch(format!(
                "inverse requires a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut inv = Matrix::identity(n);
        for col in 0..n {
            let pivot_row = Self::max_pivot_row(&work, col);
            let pivot = work.value(pivot_row, col);
            if pivot.abs() <= precision::SINGULAR {
                return Err(GeomError::Singular {
                    pivot: pivot.abs(),
                });
            }
            if pivot_row != col {
                work.swap_rows(pivot_row, col);
                inv.swap_rows(pivot_row, col);
            }
            let pivot = work.value(col, col);
            for j in 0..n {
                work.set_value(col, j, work.value(col, j) / pivot);
                inv.set_value(col, j, inv.value(col, j) / pivot);
            }
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = work.value(row, col);
                for j in 0..n {
                    let w = work.value(row, j) - factor * work.value(col, j);
                    work.set_value(row, j, w);
                    let v = inv.value(row, j) - factor * inv.value(col, j);
                    inv.set_value(row, j, v);
                }
            }
        }
        Ok(inv)
    }

    /// Returns true if both matrices have the same shape and all entries
    /// agree within tolerance.
    pub fn is_equal(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    // Row with the largest |entry| in the column, at or below the diagonal.
    fn max_pivot_row(m: &Matrix, col: usize) -> usize {
        let mut best = col;
        for row in (col + 1)..m.rows {
            if m.value(row, col).abs() > m.value(best, col).abs() {
                best = row;
            }
        }
        best
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            let tmp = self.value(a, j);
            self.set_value(a, j, self.value(b, j));
            self.set_value(b, j, tmp);
        }
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    /// Fixed-size arrays are rectangular by construction, so this
    /// conversion cannot fail.
    fn from(rows: [[f64; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);
        for row in &rows {
            data.extend_from_slice(row);
        }
        Matrix {
            rows: R,
            cols: C,
            data,
        }
    }
}

impl fmt::Display for Matrix {
    /// Rows joined by newline, cells within a row joined by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.value(i, j))?;
            }
        }
        Ok(())
    }
}
