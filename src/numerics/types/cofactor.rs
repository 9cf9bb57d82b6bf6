// src/numerics/types/cofactor.rs
// Minors, recursive cofactor-expansion determinant, adjugate and inverse.

use crate::numerics::config::NumericsConfig;

use super::error::MatrixError;
use super::matrix::Matrix;
use super::traits::FloatingPoint;

impl<T: FloatingPoint> Matrix<T> {
    /// The `(rows - 1) x (cols - 1)` submatrix without row `y` and column `x`.
    ///
    /// # Panics
    /// Panics if `y >= rows` or `x >= cols`.
    pub fn minor(&self, y: usize, x: usize) -> Self {
        self.check_index(y, x);
        let cols = self.cols();
        let values = self
            .values()
            .iter()
            .enumerate()
            .filter(|(ix, _)| ix / cols != y && ix % cols != x)
            .map(|(_, &value)| value)
            .collect();
        Self::from_parts(self.rows() - 1, cols - 1, values)
    }

    /// Every `minor(y, x)`, y outer and x inner.
    pub fn minors(&self) -> Vec<Self> {
        (0..self.rows())
            .flat_map(move |y| (0..self.cols()).map(move |x| self.minor(y, x)))
            .collect()
    }

    /// Determinant by cofactor expansion along row 0.
    ///
    /// Cost grows as O(n!); see [`Matrix::checked_determinant`] for a bounded
    /// variant.
    ///
    /// # Errors
    /// * `MatrixError::NotSquare` - `rows != cols`
    /// * `MatrixError::Empty` - the matrix is 0x0
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.ensure_square("determinant")?;
        Ok(self.expand())
    }

    /// [`Matrix::determinant`], refusing orders above
    /// `config.max_cofactor_order` with `MatrixError::OrderLimitExceeded`.
    pub fn checked_determinant(&self, config: &NumericsConfig) -> Result<T, MatrixError> {
        self.ensure_square("determinant")?;
        config.check_order(self.rows())?;
        Ok(self.expand())
    }

    /// Transpose of the cofactor matrix.
    ///
    /// # Errors
    /// Same shape errors as [`Matrix::determinant`].
    pub fn adjugate(&self) -> Result<Self, MatrixError> {
        self.ensure_square("adjugate")?;
        Ok(self.cofactor_transpose())
    }

    /// `adjugate / determinant`.
    ///
    /// # Errors
    /// * `MatrixError::Singular` - the determinant is exactly zero
    /// * shape errors as for [`Matrix::determinant`]
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.ensure_square("inverse")?;
        self.invert()
    }

    /// [`Matrix::inverse`], refusing orders above `config.max_cofactor_order`.
    pub fn checked_inverse(&self, config: &NumericsConfig) -> Result<Self, MatrixError> {
        self.ensure_square("inverse")?;
        config.check_order(self.rows())?;
        self.invert()
    }

    fn ensure_square(&self, operation: &'static str) -> Result<(), MatrixError> {
        if !self.is_square() {
            tracing::debug!(rows = self.rows(), cols = self.cols(), operation, "matrix is not square");
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
                operation,
            });
        }
        if self.rows() == 0 {
            tracing::debug!(operation, "matrix is empty");
            return Err(MatrixError::Empty { operation });
        }
        Ok(())
    }

    fn invert(&self) -> Result<Self, MatrixError> {
        let determinant = self.expand();
        if determinant == T::zero() {
            tracing::debug!(order = self.rows(), "matrix is singular");
            return Err(MatrixError::Singular);
        }
        Ok(self.cofactor_transpose().map(|value| value / determinant))
    }

    // Requires a non-empty square matrix. The sign exponent is the column
    // index within this call's row 0.
    fn expand(&self) -> T {
        match self.rows() {
            1 => self.get(0, 0),
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            _ => (0..self.cols()).fold(T::zero(), |sum, x| {
                sum + self.values()[x] * self.minor(0, x).expand() * T::alternating(x)
            }),
        }
    }

    // Minors of the transpose, in row-major order, each signed by the
    // checkerboard position (y + x) it lands on. For odd orders this equals
    // (-1)^index over the flattened minors; for even orders only (y + x)
    // keeps inverse * m == identity.
    fn cofactor_transpose(&self) -> Self {
        let order = self.rows();
        if order == 1 {
            return Self::identity(1);
        }
        let values = self
            .transpose()
            .minors()
            .iter()
            .enumerate()
            .map(|(ix, minor)| minor.expand() * T::alternating(ix / order + ix % order))
            .collect();
        Self::from_parts(order, order, values)
    }
}
