//! LU factorization of square matrices.
//!
//! [`Matrix::lu_decompose`] computes the plain Doolittle factorization `A = L * U`, which fails
//! whenever a zero pivot shows up. [`Matrix::plu_decompose`] adds partial pivoting: it reorders
//! rows so that each elimination step divides by the largest remaining entry of its column,
//! which both fixes the zero-pivot failures and keeps the factorization numerically stable. The
//! resulting [`Plu`] satisfies `P * A == L * U` and can solve linear systems and compute
//! determinants.

use crate::{Abs, Number, Vector};

use super::Matrix;

/// A pivoted LU factorization, produced by [`Matrix::plu_decompose`].
///
/// The factors satisfy `p * a == l * u`, where `a` is the decomposed matrix.
#[derive(Debug, Clone, Copy)]
pub struct Plu<T, const N: usize> {
    /// The permutation matrix; exactly one 1 per row and column.
    pub p: Matrix<T, N, N>,
    /// Unit lower triangular factor (1 on the diagonal).
    pub l: Matrix<T, N, N>,
    /// Upper triangular factor.
    pub u: Matrix<T, N, N>,
    /// Number of row exchanges `p` performs; determines the sign of the determinant.
    pub swaps: usize,
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Computes the Doolittle factorization `self == l * u` without pivoting, where `l` is unit
    /// lower triangular and `u` is upper triangular.
    ///
    /// Returns [`None`] when elimination hits a zero pivot with nonzero entries still below it.
    /// That can happen to perfectly invertible matrices (swap two rows of the identity), so
    /// prefer [`Matrix::plu_decompose`] unless the row order is significant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 1.0],
    ///     [4.0, 3.0],
    /// ]);
    /// let (l, u) = mat.lu_decompose().unwrap();
    /// assert_eq!(l * u, mat);
    /// ```
    pub fn lu_decompose(&self) -> Option<(Self, Self)> {
        let mut u = *self;
        let mut l = Self::IDENTITY;

        for k in 0..N {
            for row in k + 1..N {
                if u[(row, k)] == T::ZERO {
                    continue;
                }
                if u[(k, k)] == T::ZERO {
                    return None;
                }
                let factor = u[(row, k)] / u[(k, k)];
                l[(row, k)] = factor;
                // Zeroed directly; recomputing `u - factor * u` leaves rounding residue.
                u[(row, k)] = T::ZERO;
                for col in k + 1..N {
                    u[(row, col)] = u[(row, col)] - factor * u[(k, col)];
                }
            }
        }

        Some((l, u))
    }

    /// Computes the pivoted factorization `p * self == l * u`.
    ///
    /// Each elimination step divides by the largest remaining entry (by absolute value) of its
    /// column, exchanging rows as needed. The exchanges are accumulated into the permutation
    /// matrix `p` and applied to the factors, so the returned triple always multiplies back to
    /// the row-reordered input.
    ///
    /// Returns [`None`] when a whole pivot column is zero, which happens exactly when `self` is
    /// singular.
    pub fn plu_decompose(&self) -> Option<Plu<T, N>>
    where
        T: Abs + PartialOrd,
    {
        let mut u = *self;
        let mut l = Self::IDENTITY;
        // perm[k] is the original row that ends up in row k.
        let mut perm: [usize; N] = std::array::from_fn(|i| i);
        let mut swaps = 0;

        for k in 0..N {
            let mut pivot = k;
            for row in k + 1..N {
                if u[(row, k)].abs() > u[(pivot, k)].abs() {
                    pivot = row;
                }
            }
            if u[(pivot, k)] == T::ZERO {
                return None;
            }

            if pivot != k {
                u.swap_rows(k, pivot);
                perm.swap(k, pivot);
                // The already-computed multipliers move with their rows.
                for col in 0..k {
                    let tmp = l[(k, col)];
                    l[(k, col)] = l[(pivot, col)];
                    l[(pivot, col)] = tmp;
                }
                swaps += 1;
            }

            for row in k + 1..N {
                let factor = u[(row, k)] / u[(k, k)];
                l[(row, k)] = factor;
                u[(row, k)] = T::ZERO;
                for col in k + 1..N {
                    u[(row, col)] = u[(row, col)] - factor * u[(k, col)];
                }
            }
        }

        let mut p = Self::ZERO;
        for (row, &orig) in perm.iter().enumerate() {
            p[(row, orig)] = T::ONE;
        }

        Some(Plu { p, l, u, swaps })
    }
}

impl<T: Number, const N: usize> Plu<T, N> {
    /// Solves `a * x == b` for `x`, where `a` is the decomposed matrix.
    ///
    /// Applies the permutation to `b`, then forward-substitutes through `l` and
    /// back-substitutes through `u`. No division by zero can occur because the factorization
    /// only exists for invertible matrices.
    pub fn solve(&self, b: Vector<T, N>) -> Vector<T, N> {
        let pb = self.p * b;

        // l * y == pb
        let mut y = Vector::<T, N>::ZERO;
        for i in 0..N {
            let sum = (0..i).fold(T::ZERO, |acc, j| acc + self.l[(i, j)] * y[j]);
            y[i] = pb[i] - sum;
        }

        // u * x == y
        let mut x = Vector::ZERO;
        for i in (0..N).rev() {
            let sum = (i + 1..N).fold(T::ZERO, |acc, j| acc + self.u[(i, j)] * x[j]);
            x[i] = (y[i] - sum) / self.u[(i, i)];
        }
        x
    }

    /// Returns the determinant of the decomposed matrix.
    ///
    /// This is the product of the diagonal of `u`, negated once per row exchange.
    pub fn determinant(&self) -> T {
        let diag = (0..N).fold(T::ONE, |acc, i| acc * self.u[(i, i)]);
        if self.swaps % 2 == 0 {
            diag
        } else {
            -diag
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Mat2f, Mat3f, Mat4f, Matrix};

    fn random_mat4() -> Mat4f {
        Mat4f::from_fn(|_, _| fastrand::f32() * 10.0 - 5.0)
    }

    fn is_unit_lower_triangular(m: &Mat4f) -> bool {
        (0..4).all(|row| m[(row, row)] == 1.0)
            && (0..4).all(|row| (row + 1..4).all(|col| m[(row, col)] == 0.0))
    }

    fn is_upper_triangular(m: &Mat4f) -> bool {
        (1..4).all(|row| (0..row).all(|col| m[(row, col)] == 0.0))
    }

    #[test]
    fn lu_known_factors() {
        #[rustfmt::skip]
        let mat = Mat2f::from_row_major(&[
            2.0, 1.0,
            4.0, 3.0,
        ]);
        let (l, u) = mat.lu_decompose().unwrap();
        assert_eq!(l, Mat2f::from_row_major(&[1.0, 0.0, 2.0, 1.0]));
        assert_eq!(u, Mat2f::from_row_major(&[2.0, 1.0, 0.0, 1.0]));
        assert_eq!(l * u, mat);
    }

    #[test]
    fn lu_zero_pivot() {
        // Invertible, but the top-left pivot is zero, so the unpivoted factorization fails...
        #[rustfmt::skip]
        let mat = Mat2f::from_row_major(&[
            0.0, 1.0,
            1.0, 0.0,
        ]);
        assert!(mat.lu_decompose().is_none());

        // ...while the pivoted one swaps the rows and succeeds.
        let plu = mat.plu_decompose().unwrap();
        assert_eq!(plu.swaps, 1);
        assert_approx_eq!(plu.p * mat, plu.l * plu.u);
        assert_approx_eq!(plu.determinant(), -1.0);
    }

    #[test]
    fn lu_tolerates_zero_column_below_pivot() {
        // Zero pivot in the last column needs no elimination, so this still factors.
        #[rustfmt::skip]
        let mat = Mat2f::from_row_major(&[
            1.0, 2.0,
            0.0, 0.0,
        ]);
        let (l, u) = mat.lu_decompose().unwrap();
        assert_eq!(l * u, mat);
    }

    #[test]
    fn factors_are_exactly_triangular() {
        // The multipliers here are not representable exactly (1/3, 2/7, ...), so recomputing
        // the eliminated entries would leave rounding residue below the diagonal.
        #[rustfmt::skip]
        let mat = Mat3f::from_row_major(&[
            3.0, 1.0, 2.0,
            1.0, 4.0, 1.0,
            2.0, 5.0, 7.0,
        ]);

        let (l, u) = mat.lu_decompose().unwrap();
        for row in 1..3 {
            for col in 0..row {
                assert_eq!(u[(row, col)], 0.0);
            }
        }
        assert_approx_eq!(l * u, mat).abs(1e-5);

        let plu = mat.plu_decompose().unwrap();
        for row in 1..3 {
            for col in 0..row {
                assert_eq!(plu.u[(row, col)], 0.0);
            }
        }
        assert_approx_eq!(plu.p * mat, plu.l * plu.u).abs(1e-5);
    }

    #[test]
    fn plu_reassembles_randomized() {
        fastrand::seed(0x1db84c80);
        for _ in 0..100 {
            let mat = random_mat4();
            // A random matrix is almost surely invertible; skip the exception.
            let Some(plu) = mat.plu_decompose() else { continue };

            assert!(is_unit_lower_triangular(&plu.l), "{:?}", plu.l);
            assert!(is_upper_triangular(&plu.u), "{:?}", plu.u);
            assert_approx_eq!(plu.p * mat, plu.l * plu.u).abs(1e-2);
            assert_approx_eq!(plu.determinant(), mat.determinant())
                .abs(1e-3)
                .rel(1e-3);
        }
    }

    #[test]
    fn plu_singular() {
        #[rustfmt::skip]
        let mat = Mat3f::from_row_major(&[
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0,
            0.0, 1.0, 1.0,
        ]);
        assert!(mat.plu_decompose().is_none());
        assert!(Mat3f::ZERO.plu_decompose().is_none());
    }

    #[test]
    fn solve() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27  =>  (x, y, z) = (5, 3, -2)
        #[rustfmt::skip]
        let a = Mat3f::from_row_major(&[
            1.0, 1.0,  1.0,
            0.0, 2.0,  5.0,
            2.0, 5.0, -1.0,
        ]);
        let b = vec3(6.0, -4.0, 27.0);

        let plu = a.plu_decompose().unwrap();
        let x = plu.solve(b);
        assert_approx_eq!(x, vec3(5.0, 3.0, -2.0)).abs(1e-5);
        assert_approx_eq!(a * x, b).abs(1e-4);
    }

    #[test]
    fn identity_factors_trivially() {
        let plu = Matrix::<f32, 3, 3>::IDENTITY.plu_decompose().unwrap();
        assert_eq!(plu.p, Mat3f::IDENTITY);
        assert_eq!(plu.l, Mat3f::IDENTITY);
        assert_eq!(plu.u, Mat3f::IDENTITY);
        assert_eq!(plu.swaps, 0);
        assert_eq!(plu.determinant(), 1.0);
    }
}
