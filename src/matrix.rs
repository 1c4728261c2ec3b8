use std::{array, fmt};

use crate::{Abs, Number, One, Trig, Vector, Zero};

mod decompose;
mod ops;
mod transform;

pub use decompose::Plu;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Storage
///
/// Elements are stored as `C` contiguous columns of `R` elements each, so element `(row, col)`
/// lives at flat offset `row + R * col`. The [`bytemuck::Pod`] impl exposes that buffer directly,
/// which is the layout graphics APIs expect for 4x4 transform matrices.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays of row or
///   column vectors.
/// - [`Matrix::from_row_major`] re-lays out a flat row-major slice into the column-major store
///   (and panics when the slice length isn't `R * C`).
/// - [`Matrix::from_fn`] initializes each element from a closure given its row and column.
/// - [`Matrix::from_diagonal`] builds a square matrix with zeroes outside the diagonal.
/// - [`Matrix::ZERO`] is the all-zeroes matrix and [`Matrix::IDENTITY`] has 1 on the main
///   diagonal and 0 elsewhere.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(usize, usize)` tuples, `(row, col)`
/// like in mathematical notation, 0-based. Out-of-bounds indices panic, just like they do for
/// slices; [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`] for checked access. Whole
/// rows and columns are extracted with [`Matrix::row`] and [`Matrix::column`] and replaced with
/// [`Matrix::set_row`] and [`Matrix::set_col`].
///
/// # Multiplication convention
///
/// `Matrix * Vector` treats the vector as a column and applies the linear map, so transforms
/// compose right-to-left (`projection * view * model * v`). The `Vector * Matrix` form treats
/// the vector as a row and computes the transposed product.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smaller of the two dimensions (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        let rows = rows.map(|row| row.into().into_array());
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a flat slice in *row-major* order, re-laying the elements into
    /// the column-major store.
    ///
    /// # Panics
    ///
    /// Panics when `data.len() != R * C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Mat2::from_row_major(&[
    ///     1, 2,
    ///     3, 4,
    /// ]);
    /// assert_eq!(mat[(0, 1)], 2);
    /// assert_eq!(mat[(1, 0)], 3);
    /// ```
    pub fn from_row_major(data: &[T]) -> Self
    where
        T: Copy,
    {
        assert!(
            data.len() == R * C,
            "row-major data has {} elements, expected {R}x{C} = {}",
            data.len(),
            R * C,
        );
        Self::from_fn(|row, col| data[col + C * row])
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix; `out(col, row) == self(row, col)`.
    ///
    /// Transposing cannot fail, and transposing twice returns the original matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Extracts row `index` as a [`Vector`] of length `C`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= R`.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(index < R, "row index {index} out of bounds for {R} rows");
        Vector::from_fn(|col| self[(index, col)])
    }

    /// Extracts column `index` as a [`Vector`] of length `R`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= C`.
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(index < C, "column index {index} out of bounds for {C} columns");
        Vector::from_fn(|row| self[(row, index)])
    }

    /// Replaces row `index` with the given elements.
    ///
    /// # Panics
    ///
    /// Panics when `index >= R`.
    pub fn set_row<U: Into<Vector<T, C>>>(&mut self, index: usize, row: U)
    where
        T: Copy,
    {
        assert!(index < R, "row index {index} out of bounds for {R} rows");
        let row = row.into().into_array();
        for col in 0..C {
            self.0[col][index] = row[col];
        }
    }

    /// Replaces column `index` with the given elements.
    ///
    /// # Panics
    ///
    /// Panics when `index >= C`.
    pub fn set_col<U: Into<Vector<T, R>>>(&mut self, index: usize, column: U) {
        assert!(index < C, "column index {index} out of bounds for {C} columns");
        self.0[index] = column.into().into_array();
    }

    /// Exchanges the elements of rows `a` and `b`.
    ///
    /// This is the row operation partial pivoting is built from; see
    /// [`Matrix::plu_decompose`].
    ///
    /// # Panics
    ///
    /// Panics when `a >= R` or `b >= R`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < R && b < R, "row indices {a}, {b} out of bounds for {R} rows");
        for col in 0..C {
            self.0[col].swap(a, b);
        }
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` are initialized with [`T::ZERO`][Zero::ZERO].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self[(row, col)]
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix: 1 on the main diagonal, 0 everywhere else.
    ///
    /// For square matrices this is the multiplicative identity: `m * IDENTITY == m` and
    /// `IDENTITY * m == m`. (The constant exists for non-square shapes too, where it simply
    /// carries the partial diagonal.)
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal; elements outside the diagonal are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into().into_array();
        let mut this = Self::ZERO;
        for (i, elem) in diag.into_iter().enumerate() {
            this[(i, i)] = elem;
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of the diagonal elements).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Sizes up to 3x3 use the closed-form expansions; 4x4 uses a Laplace expansion over
    /// precomputed 2x2 sub-determinants (the common case for transform math); anything larger
    /// falls back to recursive cofactor expansion along the first row. All paths compute the
    /// same function.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Matrix::from_diagonal([2.0, 3.0, 4.0]).determinant(), 24.0);
    /// ```
    pub fn determinant(&self) -> T {
        match N {
            0 => T::ONE,
            1 => self[(0, 0)],
            2 => self.det2(),
            3 => self.det3(),
            4 => self.det4(),
            _ => {
                let mut cols = [0; N];
                for (i, col) in cols.iter_mut().enumerate() {
                    *col = i;
                }
                self.cofactor_expand(0, &cols)
            }
        }
    }

    fn det2(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    fn det3(&self) -> T {
        self[(0, 0)] * (self[(1, 1)] * self[(2, 2)] - self[(1, 2)] * self[(2, 1)])
            - self[(0, 1)] * (self[(1, 0)] * self[(2, 2)] - self[(1, 2)] * self[(2, 0)])
            + self[(0, 2)] * (self[(1, 0)] * self[(2, 1)] - self[(1, 1)] * self[(2, 0)])
    }

    fn det4(&self) -> T {
        let sub00 = self[(2, 2)] * self[(3, 3)] - self[(3, 2)] * self[(2, 3)];
        let sub01 = self[(2, 1)] * self[(3, 3)] - self[(3, 1)] * self[(2, 3)];
        let sub02 = self[(2, 1)] * self[(3, 2)] - self[(3, 1)] * self[(2, 2)];
        let sub03 = self[(2, 0)] * self[(3, 3)] - self[(3, 0)] * self[(2, 3)];
        let sub04 = self[(2, 0)] * self[(3, 2)] - self[(3, 0)] * self[(2, 2)];
        let sub05 = self[(2, 0)] * self[(3, 1)] - self[(3, 0)] * self[(2, 1)];

        let c0 = self[(1, 1)] * sub00 - self[(1, 2)] * sub01 + self[(1, 3)] * sub02;
        let c1 = -(self[(1, 0)] * sub00 - self[(1, 2)] * sub03 + self[(1, 3)] * sub04);
        let c2 = self[(1, 0)] * sub01 - self[(1, 1)] * sub03 + self[(1, 3)] * sub05;
        let c3 = -(self[(1, 0)] * sub02 - self[(1, 1)] * sub04 + self[(1, 2)] * sub05);

        self[(0, 0)] * c0 + self[(0, 1)] * c1 + self[(0, 2)] * c2 + self[(0, 3)] * c3
    }

    /// Cofactor expansion along the topmost remaining row, over the columns listed in `cols`.
    ///
    /// Minors always delete the top row, so the remaining rows stay contiguous and only the
    /// column subset needs to be tracked; the scratch buffer keeps this allocation-free.
    fn cofactor_expand(&self, row: usize, cols: &[usize]) -> T {
        match *cols {
            [] => T::ONE,
            [col] => self[(row, col)],
            [a, b] => self[(row, a)] * self[(row + 1, b)] - self[(row, b)] * self[(row + 1, a)],
            _ => {
                let mut det = T::ZERO;
                let mut sign = T::ONE;
                for i in 0..cols.len() {
                    let mut minor = [0; N];
                    let mut len = 0;
                    for (j, &col) in cols.iter().enumerate() {
                        if j != i {
                            minor[len] = col;
                            len += 1;
                        }
                    }
                    let cofactor = self.cofactor_expand(row + 1, &minor[..len]);
                    det = det + sign * self[(row, cols[i])] * cofactor;
                    sign = -sign;
                }
                det
            }
        }
    }

    /// Inverts this matrix.
    ///
    /// Sizes up to 4x4 use the closed-form adjugate formulas (the 4x4 case reuses 18 2x2
    /// sub-determinants); larger sizes solve against the identity columns via
    /// [`Matrix::plu_decompose`].
    ///
    /// # Panics
    ///
    /// Panics if `self` is not invertible, that is, if its [`determinant`][Self::determinant]
    /// is zero. Use [`Matrix::try_invert`] when singular inputs are expected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_approx_eq!(m * m.invert(), Mat2f::IDENTITY).abs(1e-6);
    /// ```
    pub fn invert(&self) -> Self
    where
        T: Abs + PartialOrd,
    {
        match self.try_invert() {
            Some(inverse) => inverse,
            None => panic!("attempt to invert a non-invertible matrix"),
        }
    }

    /// Inverts this matrix, returning [`None`] if it is singular (zero determinant).
    pub fn try_invert(&self) -> Option<Self>
    where
        T: Abs + PartialOrd,
    {
        match N {
            0 => Some(*self),
            1 => {
                let det = self[(0, 0)];
                if det == T::ZERO {
                    return None;
                }
                let mut out = Self::ZERO;
                out[(0, 0)] = T::ONE / det;
                Some(out)
            }
            2 => self.invert2(),
            3 => self.invert3(),
            4 => self.invert4(),
            _ => {
                let plu = self.plu_decompose()?;
                let mut out = Self::ZERO;
                for col in 0..N {
                    let mut e = Vector::ZERO;
                    e[col] = T::ONE;
                    let x = plu.solve(e);
                    for row in 0..N {
                        out[(row, col)] = x[row];
                    }
                }
                Some(out)
            }
        }
    }

    fn invert2(&self) -> Option<Self> {
        let det = self.det2();
        if det == T::ZERO {
            return None;
        }
        let inv_det = T::ONE / det;

        let mut out = Self::ZERO;
        out[(0, 0)] = self[(1, 1)] * inv_det;
        out[(0, 1)] = -self[(0, 1)] * inv_det;
        out[(1, 0)] = -self[(1, 0)] * inv_det;
        out[(1, 1)] = self[(0, 0)] * inv_det;
        Some(out)
    }

    fn invert3(&self) -> Option<Self> {
        let det = self.det3();
        if det == T::ZERO {
            return None;
        }
        let inv_det = T::ONE / det;

        let (m00, m01, m02) = (self[(0, 0)], self[(0, 1)], self[(0, 2)]);
        let (m10, m11, m12) = (self[(1, 0)], self[(1, 1)], self[(1, 2)]);
        let (m20, m21, m22) = (self[(2, 0)], self[(2, 1)], self[(2, 2)]);

        // Adjugate: out(i, j) is the cofactor of (j, i).
        let mut out = Self::ZERO;
        out[(0, 0)] = (m11 * m22 - m12 * m21) * inv_det;
        out[(0, 1)] = (m02 * m21 - m01 * m22) * inv_det;
        out[(0, 2)] = (m01 * m12 - m02 * m11) * inv_det;
        out[(1, 0)] = (m12 * m20 - m10 * m22) * inv_det;
        out[(1, 1)] = (m00 * m22 - m02 * m20) * inv_det;
        out[(1, 2)] = (m02 * m10 - m00 * m12) * inv_det;
        out[(2, 0)] = (m10 * m21 - m11 * m20) * inv_det;
        out[(2, 1)] = (m01 * m20 - m00 * m21) * inv_det;
        out[(2, 2)] = (m00 * m11 - m01 * m10) * inv_det;
        Some(out)
    }

    fn invert4(&self) -> Option<Self> {
        let det = self.det4();
        if det == T::ZERO {
            return None;
        }
        let inv_det = T::ONE / det;

        let (m00, m01, m02, m03) = (self[(0, 0)], self[(0, 1)], self[(0, 2)], self[(0, 3)]);
        let (m10, m11, m12, m13) = (self[(1, 0)], self[(1, 1)], self[(1, 2)], self[(1, 3)]);
        let (m20, m21, m22, m23) = (self[(2, 0)], self[(2, 1)], self[(2, 2)], self[(2, 3)]);
        let (m30, m31, m32, m33) = (self[(3, 0)], self[(3, 1)], self[(3, 2)], self[(3, 3)]);

        // 2x2 sub-determinants, shared between the adjugate entries. `a_rscs` is the
        // determinant of rows r0/r1 and columns c0/c1 of the lower part of the matrix.
        let a2323 = m22 * m33 - m23 * m32;
        let a1323 = m21 * m33 - m23 * m31;
        let a1223 = m21 * m32 - m22 * m31;
        let a0323 = m20 * m33 - m23 * m30;
        let a0223 = m20 * m32 - m22 * m30;
        let a0123 = m20 * m31 - m21 * m30;
        let a2313 = m12 * m33 - m13 * m32;
        let a1313 = m11 * m33 - m13 * m31;
        let a1213 = m11 * m32 - m12 * m31;
        let a2312 = m12 * m23 - m13 * m22;
        let a1312 = m11 * m23 - m13 * m21;
        let a1212 = m11 * m22 - m12 * m21;
        let a0313 = m10 * m33 - m13 * m30;
        let a0213 = m10 * m32 - m12 * m30;
        let a0312 = m10 * m23 - m13 * m20;
        let a0212 = m10 * m22 - m12 * m20;
        let a0113 = m10 * m31 - m11 * m30;
        let a0112 = m10 * m21 - m11 * m20;

        let mut out = Self::ZERO;
        out[(0, 0)] = (m11 * a2323 - m12 * a1323 + m13 * a1223) * inv_det;
        out[(0, 1)] = -(m01 * a2323 - m02 * a1323 + m03 * a1223) * inv_det;
        out[(0, 2)] = (m01 * a2313 - m02 * a1313 + m03 * a1213) * inv_det;
        out[(0, 3)] = -(m01 * a2312 - m02 * a1312 + m03 * a1212) * inv_det;
        out[(1, 0)] = -(m10 * a2323 - m12 * a0323 + m13 * a0223) * inv_det;
        out[(1, 1)] = (m00 * a2323 - m02 * a0323 + m03 * a0223) * inv_det;
        out[(1, 2)] = -(m00 * a2313 - m02 * a0313 + m03 * a0213) * inv_det;
        out[(1, 3)] = (m00 * a2312 - m02 * a0312 + m03 * a0212) * inv_det;
        out[(2, 0)] = (m10 * a1323 - m11 * a0323 + m13 * a0123) * inv_det;
        out[(2, 1)] = -(m00 * a1323 - m01 * a0323 + m03 * a0123) * inv_det;
        out[(2, 2)] = (m00 * a1313 - m01 * a0313 + m03 * a0113) * inv_det;
        out[(2, 3)] = -(m00 * a1312 - m01 * a0312 + m03 * a0112) * inv_det;
        out[(3, 0)] = -(m10 * a1223 - m11 * a0223 + m12 * a0123) * inv_det;
        out[(3, 1)] = (m00 * a1223 - m01 * a0223 + m02 * a0123) * inv_det;
        out[(3, 2)] = -(m00 * a1213 - m01 * a0213 + m02 * a0113) * inv_det;
        out[(3, 3)] = (m00 * a1212 - m01 * a0212 + m02 * a0112) * inv_det;
        Some(out)
    }
}

impl<T: Number + Trig> Matrix<T, 2, 2> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        Self::from_columns([
            [radians.cos(), radians.sin()],
            [-radians.sin(), radians.cos()],
        ])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        // Rows in natural writing order, despite the column-major storage.
        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}
