use std::ops::{Index, IndexMut};

use crate::error::{GeometryError, Result};

/// Dense row-major matrix of `f64`.
///
/// The shape is fixed at construction; cell values are mutable through
/// indexing and the elementary row operations. Used for 3×3 homographies,
/// 4×4 homogeneous transforms, and the rectangular systems of the
/// direct-linear-transform solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Mat {
    /// A `rows × cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// The `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Builds a matrix from row slices.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the rows have differing lengths or the
    /// input is empty.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let r = rows.len();
        let c = rows.first().map_or(0, Vec::len);
        if r == 0 || c == 0 {
            return Err(GeometryError::ShapeMismatch {
                rows_a: r,
                cols_a: c,
                rows_b: 0,
                cols_b: 0,
            });
        }
        let mut data = Vec::with_capacity(r * c);
        for row in rows {
            if row.len() != c {
                return Err(GeometryError::ShapeMismatch {
                    rows_a: 1,
                    cols_a: row.len(),
                    rows_b: 1,
                    cols_b: c,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: r, cols: c, data })
    }

    /// An `n × 1` column matrix.
    #[must_use]
    pub fn column(values: &[f64]) -> Self {
        Self { rows: values.len(), cols: 1, data: values.to_vec() }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Copies row `i` out as a vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad row index.
    pub fn row(&self, i: usize) -> Result<Vec<f64>> {
        if i >= self.rows {
            return Err(GeometryError::IndexOutOfRange { index: i, len: self.rows });
        }
        Ok(self.data[i * self.cols..(i + 1) * self.cols].to_vec())
    }

    /// Copies column `j` out as a vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad column index.
    pub fn col(&self, j: usize) -> Result<Vec<f64>> {
        if j >= self.cols {
            return Err(GeometryError::IndexOutOfRange { index: j, len: self.cols });
        }
        Ok((0..self.rows).map(|i| self.data[i * self.cols + j]).collect())
    }

    /// Overwrites row `i` with `values` (which must match the column count).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad row index, `ShapeMismatch` for a
    /// wrong length.
    pub fn set_row(&mut self, i: usize, values: &[f64]) -> Result<()> {
        if i >= self.rows {
            return Err(GeometryError::IndexOutOfRange { index: i, len: self.rows });
        }
        if values.len() != self.cols {
            return Err(GeometryError::ShapeMismatch {
                rows_a: 1,
                cols_a: values.len(),
                rows_b: 1,
                cols_b: self.cols,
            });
        }
        self.data[i * self.cols..(i + 1) * self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both shapes are equal.
    pub fn try_add(&self, other: &Mat) -> Result<Mat> {
        self.require_same_shape(other)?;
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect();
        Ok(Mat { rows: self.rows, cols: self.cols, data })
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both shapes are equal.
    pub fn try_sub(&self, other: &Mat) -> Result<Mat> {
        self.require_same_shape(other)?;
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a - b).collect();
        Ok(Mat { rows: self.rows, cols: self.cols, data })
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `self.cols == other.rows`.
    pub fn try_mul(&self, other: &Mat) -> Result<Mat> {
        if self.cols != other.rows {
            return Err(GeometryError::ShapeMismatch {
                rows_a: self.rows,
                cols_a: self.cols,
                rows_b: other.rows,
                cols_b: other.cols,
            });
        }
        let mut out = Mat::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * other.cols + j] = acc;
            }
        }
        Ok(out)
    }

    /// Scalar multiple of every cell.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Mat {
        let data = self.data.iter().map(|v| v * factor).collect();
        Mat { rows: self.rows, cols: self.cols, data }
    }

    /// Elementwise negation.
    #[must_use]
    pub fn neg(&self) -> Mat {
        self.scale(-1.0)
    }

    /// The transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Mat {
        let mut out = Mat::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Elementary operation: swap rows `r1` and `r2`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad row index.
    pub fn exchange_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
        let hi = r1.max(r2);
        if hi >= self.rows {
            return Err(GeometryError::IndexOutOfRange { index: hi, len: self.rows });
        }
        if r1 == r2 {
            return Ok(());
        }
        for j in 0..self.cols {
            self.data.swap(r1 * self.cols + j, r2 * self.cols + j);
        }
        Ok(())
    }

    /// Elementary operation: multiply row `r` by `factor` in place.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad row index.
    pub fn scale_row(&mut self, r: usize, factor: f64) -> Result<()> {
        if r >= self.rows {
            return Err(GeometryError::IndexOutOfRange { index: r, len: self.rows });
        }
        for j in 0..self.cols {
            self.data[r * self.cols + j] *= factor;
        }
        Ok(())
    }

    /// Elementary operation: add `factor` times row `src` to row `dst`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad row index.
    pub fn add_scaled_row(&mut self, src: usize, dst: usize, factor: f64) -> Result<()> {
        let hi = src.max(dst);
        if hi >= self.rows {
            return Err(GeometryError::IndexOutOfRange { index: hi, len: self.rows });
        }
        for j in 0..self.cols {
            let v = self.data[src * self.cols + j] * factor;
            self.data[dst * self.cols + j] += v;
        }
        Ok(())
    }

    /// Determinant by Gaussian elimination with partial pivoting.
    ///
    /// The largest-magnitude entry of each remaining column is chosen as the
    /// pivot; every row swap flips the accumulator's sign; the result is the
    /// product of the triangulated diagonal.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for a non-square matrix.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(GeometryError::ShapeMismatch {
                rows_a: self.rows,
                cols_a: self.cols,
                rows_b: self.cols,
                cols_b: self.cols,
            });
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut res = 1.0;
        for i in 0..n {
            let mut row_max = i;
            let mut max = work[(i, i)].abs();
            for j in i..n {
                if work[(j, i)].abs() > max {
                    row_max = j;
                    max = work[(j, i)].abs();
                }
            }
            if row_max != i {
                work.exchange_rows(i, row_max)?;
                res = -res;
            }
            for j in (i + 1)..n {
                let r = -work[(j, i)] / work[(i, i)];
                work.add_scaled_row(i, j, r)?;
            }
        }
        for i in 0..n {
            res *= work[(i, i)];
        }
        Ok(res)
    }

    /// Inverse by Gauss–Jordan elimination with partial pivoting.
    ///
    /// An identity matrix receives the same row operations that reduce the
    /// source to the identity: pivot selection, row swap, pivot
    /// normalization, full-column elimination.
    ///
    /// # Errors
    ///
    /// Returns `SingularMatrix` for a non-square matrix or a determinant of
    /// zero. A rank-deficient matrix can triangulate through a zero pivot
    /// and surface as a non-finite determinant; that counts as singular too.
    pub fn inverse(&self) -> Result<Mat> {
        if !self.is_square() {
            return Err(GeometryError::SingularMatrix);
        }
        let det = self.determinant()?;
        if det == 0.0 || !det.is_finite() {
            return Err(GeometryError::SingularMatrix);
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut res = Mat::identity(n);
        for i in 0..n {
            let mut row_max = i;
            let mut max = work[(i, i)].abs();
            for j in i..n {
                if work[(j, i)].abs() > max {
                    row_max = j;
                    max = work[(j, i)].abs();
                }
            }
            if row_max != i {
                work.exchange_rows(i, row_max)?;
                res.exchange_rows(i, row_max)?;
            }
            let r = 1.0 / work[(i, i)];
            work.scale_row(i, r)?;
            res.scale_row(i, r)?;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let r = -work[(j, i)];
                work.add_scaled_row(i, j, r)?;
                res.add_scaled_row(i, j, r)?;
            }
        }
        Ok(res)
    }

    fn require_same_shape(&self, other: &Mat) -> Result<()> {
        if self.rows == other.rows && self.cols == other.cols {
            Ok(())
        } else {
            Err(GeometryError::ShapeMismatch {
                rows_a: self.rows,
                cols_a: self.cols,
                rows_b: other.rows,
                cols_b: other.cols,
            })
        }
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "matrix index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.rows && j < self.cols, "matrix index ({i}, {j}) out of bounds");
        &mut self.data[i * self.cols + j]
    }
}
