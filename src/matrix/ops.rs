//! Implementations of `std::ops`.
//!
//! `+` and `-` between equal-shaped matrices are elementwise. `*` is the linear-algebra product:
//! `Matrix * Matrix` requires the inner dimensions to agree (checked at compile time),
//! `Matrix * Vector` applies the matrix to a column vector, and `Vector * Matrix` is the
//! row-vector (transposed) form. `*` and `/` with a scalar broadcast to every element.

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::approx::ApproxEq;
use crate::{Number, Vector};

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!("index ({row}, {col}) out of bounds for {R}x{C} matrix"),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => panic!("index ({row}, {col}) out of bounds for {R}x{C} matrix"),
        }
    }
}

// More general impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        (0..C).all(|col| self.0[col].abs_diff_eq(&other.0[col], abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        (0..C).all(|col| self.0[col].rel_diff_eq(&other.0[col], rel_tolerance))
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Add + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        for col in 0..C {
            for row in 0..R {
                self[(row, col)] += rhs[(row, col)];
            }
        }
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: Sub + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        for col in 0..C {
            for row in 0..R {
                self[(row, col)] -= rhs[(row, col)];
            }
        }
    }
}

/// Matrix multiplication; the inner dimensions have to match, which is enforced at compile time.
impl<T: Number, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        Matrix::from_fn(|row, col| {
            (0..K).fold(T::ZERO, |acc, k| acc + self[(row, k)] * rhs[(k, col)])
        })
    }
}

/// Applies the linear map to a column vector.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Row-vector times matrix; equivalent to `m.transpose() * v`.
impl<T: Number, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| (0..R).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

/// Matrix * Scalar (scaling).
impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar (scaling).
impl<T: Number + MulAssign, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for col in 0..C {
            for row in 0..R {
                self[(row, col)] *= rhs;
            }
        }
    }
}

/// Matrix / Scalar (scaling).
impl<T: Number, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

// Scalar-on-the-left scaling. Coherence does not allow this to be generic over the scalar type,
// so it is provided per primitive.
macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            /// Scalar * Matrix (scaling).
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Mat2, Mat2x3, Mat3f, Mat4f};

    use super::*;

    #[test]
    fn add_sub() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Mat2::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-a, Mat2::from_rows([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn scalar_scaling() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(a * 2, Mat2::from_rows([[2, 4], [6, 8]]));
        assert_eq!(2 * a, a * 2);
        assert_eq!((a * 2) / 2, a);

        let mut b = a;
        b *= 3;
        assert_eq!(b, a * 3);
    }

    #[test]
    fn matrix_product() {
        #[rustfmt::skip]
        let a = Mat4f::from_row_major(&[
             1.0,  2.0,  3.0,  4.0,
             5.0,  6.0,  7.0,  8.0,
             9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]);
        #[rustfmt::skip]
        let b = Mat4f::from_row_major(&[
             5.0,  6.0,  7.0,  8.0,
             9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
             1.0,  2.0,  3.0,  4.0,
        ]);
        #[rustfmt::skip]
        let expected = Mat4f::from_row_major(&[
             66.0,  76.0,  86.0,  96.0,
            178.0, 204.0, 230.0, 256.0,
            290.0, 332.0, 374.0, 416.0,
            402.0, 460.0, 518.0, 576.0,
        ]);
        assert_eq!(a * b, expected);
    }

    #[test]
    fn product_with_identity() {
        #[rustfmt::skip]
        let mat = Mat3f::from_row_major(&[
            2.0, 0.0, 1.0,
            1.0, 3.0, 2.0,
            0.0, 1.0, 1.0,
        ]);
        assert_eq!(mat * Mat3f::IDENTITY, mat);
        assert_eq!(Mat3f::IDENTITY * mat, mat);
        assert_eq!(mat * Mat3f::ZERO, Mat3f::ZERO);
    }

    #[test]
    fn rectangular_product() {
        // (2x3) * (3x2) = (2x2)
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = a.transpose();
        assert_eq!(a * b, Mat2::from_rows([[14, 32], [32, 77]]));
    }

    #[test]
    fn matrix_vector_product() {
        let rot = Mat2::from_rows([[0, -1], [1, 0]]);
        assert_eq!(rot * vec2(1, 0), vec2(0, 1));
        assert_eq!(rot * vec2(0, 1), vec2(-1, 0));

        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a * vec3(1, 1, 1), vec2(6, 15));

        // The row-vector form is the transposed product.
        assert_eq!(vec2(1, 1) * a, vec3(5, 7, 9));
        assert_eq!(vec2(1, 1) * a, a.transpose() * vec2(1, 1));
    }

    #[test]
    fn approx() {
        let a = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = a + Mat2::from_rows([[1e-9, 0.0], [0.0, 1e-9]]);
        assert_approx_eq!(a, b).abs(1e-8);
        assert_ne!(a, b);
    }
}
