use std::ops::Index;

use crate::error::{HarnessError, Result};

/// Row-major 2D container; rows are samples, columns are features.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(HarnessError::Shape(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from row vectors, all of which must share one length.
    ///
    /// An empty `rows` yields a `(0, 0)` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(HarnessError::Shape(format!(
                    "row {} has {} columns, expected {}",
                    idx,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    pub fn select_rows(&self, indices: &[usize]) -> Array2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            data.extend_from_slice(self.row_slice(row));
        }
        Array2 {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_shape_vec_rejects_bad_length() {
        let err = Array2::from_shape_vec((2, 3), vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, HarnessError::Shape(_)));
    }

    #[test]
    fn from_rows_checks_ragged_input() {
        let ragged = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(ragged.is_err());

        let m = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    }

    #[test]
    fn select_rows_keeps_requested_order() {
        let m = Array2::from_rows(vec![vec![0.0], vec![1.0], vec![2.0]]).unwrap();
        let picked = m.select_rows(&[2, 0]);
        assert_eq!(picked.as_slice(), &[2.0, 0.0]);
        assert_eq!(picked.ncols(), 1);
    }
}
