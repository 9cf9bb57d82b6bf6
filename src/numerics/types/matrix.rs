// src/numerics/types/matrix.rs
// Dense, immutable, shape-tagged matrix with row-major storage.
// Minors, determinant, adjugate and inverse live in cofactor.rs.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Mul;
use serde::{Deserialize, Serialize};

use super::error::MatrixError;
use super::traits::FloatingPoint;

/// Dense `rows x cols` matrix stored in row-major order.
///
/// A `Matrix` never changes after construction. Every operation returns a new
/// value that owns its own buffer, so instances can be shared freely between
/// readers.
///
/// Equality is structural: same shape and exactly equal values.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: FloatingPoint = f32> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

/// Fixes a shape once, then builds matrices of that shape from flat values.
///
/// The scalar type is inferred from the values passed to [`MatrixBuilder::build`].
///
/// ```
/// use cofactor::matrix;
///
/// let m3x2 = matrix(3, 2);
/// let m = m3x2.build([1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.get(2, 1), 6.0);
/// assert!(m3x2.build([1.0f32, 2.0]).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatrixBuilder<T: FloatingPoint = f32> {
    rows: usize,
    cols: usize,
    scalar: PhantomData<T>,
}

impl<T: FloatingPoint> MatrixBuilder<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, scalar: PhantomData }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Build a matrix from exactly `rows * cols` values in row-major order.
    pub fn build<I>(&self, values: I) -> Result<Matrix<T>, MatrixError>
    where
        I: IntoIterator<Item = T>,
    {
        Matrix::new(self.rows, self.cols, values.into_iter().collect())
    }
}

/// Shorthand for [`Matrix::builder`].
pub fn matrix<T: FloatingPoint>(rows: usize, cols: usize) -> MatrixBuilder<T> {
    MatrixBuilder::new(rows, cols)
}

/// Shorthand for [`Matrix::identity`].
pub fn identity<T: FloatingPoint>(size: usize) -> Matrix<T> {
    Matrix::identity(size)
}

/// Shorthand for [`Matrix::scalar`].
pub fn scalar<T: FloatingPoint>(rows: usize, cols: usize, value: T) -> Matrix<T> {
    Matrix::scalar(rows, cols, value)
}

/// Shorthand for [`Matrix::vector`].
pub fn vector<T: FloatingPoint>(values: Vec<T>) -> Matrix<T> {
    Matrix::vector(values)
}

// Infallible constructors panic with the same message `new` reports as an error.
fn cell_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols)
        .unwrap_or_else(|| panic!("{}", MatrixError::DimensionOverflow { rows, cols }))
}

impl<T: FloatingPoint> Matrix<T> {
    /// Construct a matrix from `rows * cols` values in row-major order.
    ///
    /// # Errors
    /// * `MatrixError::ValueCount` - `values.len()` differs from `rows * cols`
    /// * `MatrixError::DimensionOverflow` - `rows * cols` overflows `usize`
    pub fn new(rows: usize, cols: usize, values: Vec<T>) -> Result<Self, MatrixError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::DimensionOverflow { rows, cols })?;

        if values.len() != expected {
            let actual = values.len();
            tracing::debug!(rows, cols, expected, actual, "rejected matrix value count");
            return Err(MatrixError::ValueCount { rows, cols, expected, actual });
        }

        Ok(Self { rows, cols, values })
    }

    /// Start building a `rows x cols` matrix.
    pub fn builder(rows: usize, cols: usize) -> MatrixBuilder<T> {
        MatrixBuilder::new(rows, cols)
    }

    /// Constructor for shapes derived from an existing, valid matrix.
    pub(crate) fn from_parts(rows: usize, cols: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { rows, cols, values }
    }

    /// Construct a matrix from rows of equal length
    pub fn from_rows<const N: usize>(rows: &[[T; N]]) -> Self {
        Self::from_parts(rows.len(), N, rows.iter().flatten().copied().collect())
    }

    /// Construct a matrix from columns of equal length
    pub fn from_columns<const N: usize>(columns: &[[T; N]]) -> Self {
        let values = (0..N)
            .flat_map(move |y| columns.iter().map(move |column| column[y]))
            .collect();
        Self::from_parts(N, columns.len(), values)
    }

    /// Square identity matrix: 1 on the diagonal, 0 elsewhere.
    ///
    /// # Panics
    /// Panics if `size * size` overflows `usize`.
    pub fn identity(size: usize) -> Self {
        let mut values = vec![T::zero(); cell_count(size, size)];
        for i in 0..size {
            values[i * size + i] = T::one();
        }
        Self::from_parts(size, size, values)
    }

    /// Matrix with every cell set to `value`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn scalar(rows: usize, cols: usize, value: T) -> Self {
        Self::from_parts(rows, cols, vec![value; cell_count(rows, cols)])
    }

    /// Column matrix (`values.len() x 1`).
    pub fn vector(values: Vec<T>) -> Self {
        Self::from_parts(values.len(), 1, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Flat row-major view of the values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value at row `y`, column `x`.
    ///
    /// # Panics
    /// Panics if `y >= rows` or `x >= cols`.
    pub fn get(&self, y: usize, x: usize) -> T {
        self.check_index(y, x);
        self.values[y * self.cols + x]
    }

    /// Value at row `y`, column `x`, or `None` outside the matrix.
    pub fn try_get(&self, y: usize, x: usize) -> Option<T> {
        (y < self.rows && x < self.cols).then(|| self.values[y * self.cols + x])
    }

    pub(crate) fn check_index(&self, y: usize, x: usize) {
        assert!(
            y < self.rows && x < self.cols,
            "index ({}, {}) out of range for a {}x{} matrix",
            y, x, self.rows, self.cols
        );
    }

    /// Row `y` as a `1 x cols` matrix.
    ///
    /// # Panics
    /// Panics if `y >= rows`.
    pub fn row(&self, y: usize) -> Self {
        assert!(y < self.rows, "row {} out of range for a {}x{} matrix", y, self.rows, self.cols);
        let start = y * self.cols;
        Self::from_parts(1, self.cols, self.values[start..start + self.cols].to_vec())
    }

    /// Column `x` as a `rows x 1` matrix.
    ///
    /// # Panics
    /// Panics if `x >= cols`.
    pub fn col(&self, x: usize) -> Self {
        assert!(x < self.cols, "column {} out of range for a {}x{} matrix", x, self.rows, self.cols);
        let values = (0..self.rows).map(|y| self.values[x + y * self.cols]).collect();
        Self::from_parts(self.rows, 1, values)
    }

    /// Swap rows and columns: `t.get(x, y) == self.get(y, x)`.
    pub fn transpose(&self) -> Self {
        let mut values = vec![T::zero(); self.values.len()];
        for y in 0..self.rows {
            for x in 0..self.cols {
                values[y + x * self.rows] = self.values[y * self.cols + x];
            }
        }
        Self::from_parts(self.cols, self.rows, values)
    }

    /// Quarter turn clockwise; the bottom row becomes the first column.
    pub fn rotate(&self) -> Self {
        let values = (0..self.cols)
            .flat_map(move |x| (0..self.rows).rev().map(move |y| self.values[y * self.cols + x]))
            .collect();
        Self::from_parts(self.cols, self.rows, values)
    }

    /// Horizontal flip: every row reversed.
    pub fn mirror(&self) -> Self {
        let values = (0..self.rows)
            .flat_map(move |y| (0..self.cols).rev().map(move |x| self.values[y * self.cols + x]))
            .collect();
        Self::from_parts(self.rows, self.cols, values)
    }

    /// Apply `f` to every value.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self::from_parts(self.rows, self.cols, self.values.iter().copied().map(f).collect())
    }

    /// Left fold over the values in storage order.
    pub fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.values.iter().copied().fold(initial, f)
    }

    /// Multiply every value by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|value| value * scalar)
    }

    /// Matrix product `self x other`.
    ///
    /// # Errors
    /// * `MatrixError::IncompatibleShapes` - `self.cols() != other.rows()`
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            tracing::debug!(
                left_rows = self.rows,
                left_cols = self.cols,
                right_rows = other.rows,
                right_cols = other.cols,
                "rejected matrix product"
            );
            return Err(MatrixError::IncompatibleShapes {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut values = vec![T::zero(); self.rows * other.cols];
        for y in 0..self.rows {
            for x in 0..other.cols {
                let ix = x + y * other.cols;
                for z in 0..self.cols {
                    values[ix] = values[ix] + self.get(y, z) * other.get(z, x);
                }
            }
        }
        Ok(Self::from_parts(self.rows, other.cols, values))
    }

    /// Same shape and every pair of values within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(&a, &b)| (a - b).magnitude() <= epsilon)
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

impl<T: FloatingPoint> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

impl<T: FloatingPoint + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for x in 0..self.cols {
                if x > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.values[y * self.cols + x])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

// Serialized as (rows, cols, values); deserialization re-checks the length.
impl<T> Serialize for Matrix<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.rows, &self.cols, &self.values).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (rows, cols, values) = <(usize, usize, Vec<T>)>::deserialize(deserializer)?;
        Matrix::new(rows, cols, values).map_err(serde::de::Error::custom)
    }
}
