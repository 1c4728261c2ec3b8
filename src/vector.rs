use std::{array, fmt};

use crate::{
    traits::{Number, Sqrt},
    Abs, Mat2, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors directly from
///   their elements.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] initializes each element from a closure given its index.
/// - [`Vector::from_partial`] takes up to `N` leading elements and zero-fills the rest.
/// - The [`From`] impl converts from an array of matching length; [`Default`] zero-initializes
///   via [`Default::default`].
/// - [`Vector::ZERO`] is the all-zeroes vector, and `Vector::X`, `Vector::Y`, `Vector::Z` and
///   `Vector::W` are the axis unit vectors for the dimensions that have them.
///
/// # Element Access
///
/// - Elements can be read and written as fields `x`, `y`, `z` and `w` (for the dimensions that
///   exist on the given vector length).
/// - The [`Index`] and [`IndexMut`] impls work like they do on arrays, panicking when the index
///   is out of bounds; [`Vector::get`] and [`Vector::get_mut`] are the checked equivalents.
/// - [`Vector::as_array`], [`Vector::as_slice`] (and the `mut` variants) and
///   [`Vector::into_array`] expose the underlying elements, as do the [`AsRef`]/[`AsMut`] impls.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when `T` allows it, for safe
///   transmutation to and from raw buffers.
///
/// # Equality
///
/// Two vectors are equal iff all elements compare equal, elementwise and exactly. Tests needing
/// tolerance use [`assert_approx_eq!`][crate::assert_approx_eq].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with every element set to 0 ([`T::ZERO`][Zero::ZERO]).
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vector::splat(2), vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector from the leading elements, filling the rest with
    /// [`T::ZERO`][Zero::ZERO].
    ///
    /// # Panics
    ///
    /// Panics when `elems` has more than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec4::from_partial(&[1, 2]), vec4(1, 2, 0, 0));
    /// ```
    pub fn from_partial(elems: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        assert!(
            elems.len() <= N,
            "partial data has {} elements, expected at most {N}",
            elems.len(),
        );
        Self::from_fn(|i| elems.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Creates a vector by invoking a closure with the index of each element.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(1, 2, 3).map(|i| i * 10), vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two vectors into one containing tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this vector into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product of `self` and `other`: the sum of the elementwise products.
    ///
    /// Geometrically, the sign of the dot product describes the relative angle of the two
    /// vectors: positive when it is less than 90°, zero at exactly 90°, negative beyond.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(2, -2, 4).dot(vec3(10, 5, 3)), 22);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (magnitude) of this vector, `sqrt(self.dot(self))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(0.0, 3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has length 0; normalizing it divides by zero and produces non-finite
    /// elements per IEEE-754. The caller is responsible for not normalizing a zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (other - self).length()
    }

    /// Linearly interpolates between `self` (at `t == 0`) and `to` (at `t == 1`).
    ///
    /// `t` is deliberately not restricted to `[0, 1]`: values outside that range extrapolate
    /// along the same line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let from = vec2(0.0, 0.0);
    /// let to = vec2(2.0, 4.0);
    /// assert_eq!(from.lerp(to, 0.5), vec2(1.0, 2.0));
    /// assert_eq!(from.lerp(to, 2.0), vec2(4.0, 8.0));
    /// ```
    pub fn lerp(self, to: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (to - self) * t
    }

    /// Elementwise absolute value.
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(T::abs)
    }

    /// Element-wise minimum of `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps every element into the range `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(-5.0, 0.25, 5.0).clamp(0.0, 1.0), vec3(0.0, 0.25, 1.0));
    /// ```
    pub fn clamp(self, lo: T, hi: T) -> Self
    where
        T: MinMax + Copy,
    {
        self.map(|elem| elem.clamp(lo, hi))
    }

    /// Reflects an incident vector off a surface with the given normal.
    ///
    /// Computes `self - 2 * normal.dot(self) * normal`. `normal` should be a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let incident = vec2(1.0, -1.0);
    /// assert_eq!(incident.reflect(Vec2f::Y), vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        self - normal * (two * normal.dot(self))
    }

    /// Refracts an incident vector through a surface with the given normal, where `eta` is the
    /// ratio of the refractive indices on the two sides.
    ///
    /// Both `self` and `normal` should be unit vectors. When the incidence angle exceeds the
    /// critical angle there is no transmitted ray (total internal reflection) and the zero
    /// vector is returned; this is documented behavior, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// // Perpendicular incidence passes straight through, for any index ratio.
    /// let down = -Vec3f::Y;
    /// assert_approx_eq!(down.refract(Vec3f::Y, 0.75), down);
    /// ```
    pub fn refract(self, normal: Self, eta: T) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let cos = normal.dot(self);
        let k = T::ONE - eta * eta * (T::ONE - cos * cos);
        if k < T::ZERO {
            return Self::ZERO;
        }

        self * eta - normal * (eta * cos + k.sqrt())
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value, yielding a 3-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// Assumes the Y axis points up and the X axis points to the right.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// Assumes the Y axis points up and the X axis points to the right.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// Equivalent to the Z coordinate of the cross product of the inputs extended with `z = 0`.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }

    /// Computes the signed clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// Assumes the Y axis points up and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element, yielding a 2-dimensional vector.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        [x, y].into()
    }

    /// Appends another value, yielding a 4-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).extend(1.0), vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs, with the direction given by the right-hand
    /// rule; swapping the arguments flips it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful.
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element, yielding a 3-dimensional vector.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);

        assert_eq!(v.get(1), Some(&1));
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn from_partial() {
        assert_eq!(Vec4::from_partial(&[1, 2]), vec4(1, 2, 0, 0));
        assert_eq!(Vec3::<i32>::from_partial(&[]), Vec3::ZERO);
        assert_eq!(Vec2::from_partial(&[7.0, 8.0]), vec2(7.0, 8.0));
    }

    #[test]
    #[should_panic(expected = "partial data has 3 elements, expected at most 2")]
    fn from_partial_too_many() {
        Vec2::from_partial(&[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(2, -2, 4).dot(vec3(10, 5, 3)), 22);
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(3.0, 0.0, 2.0).cross(vec3(-1.0, 4.0, 2.0)), vec3(-8.0, -8.0, 12.0));
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
    }

    #[test]
    fn cross_orthogonality() {
        let a = vec3(1.5, -2.0, 0.25);
        let b = vec3(-3.0, 0.5, 8.0);
        let c = a.cross(b);
        assert_approx_eq!(c.dot(a), 0.0).abs(1e-6);
        assert_approx_eq!(c.dot(b), 0.0).abs(1e-6);
    }

    #[test]
    fn length_and_normalize() {
        let v = vec3(2.0f32, -3.0, 6.0);
        assert_eq!(v.length2(), 49.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.length(), v.dot(v).sqrt());
        assert_approx_eq!(v.normalize().length(), 1.0).abs(1e-6);

        // Normalizing the zero vector is the caller's bug; the result is non-finite, not a panic.
        let degenerate = Vec2f::ZERO.normalize();
        assert!(degenerate.x.is_nan());
    }

    #[test]
    fn distance() {
        assert_eq!(vec2(1.0, 2.0).distance(vec2(1.0, 2.0)), 0.0);
        assert_eq!(vec3(1.0, 0.0, 0.0).distance(vec3(4.0, 4.0, 0.0)), 5.0);
        assert_eq!(vec3(4.0, 4.0, 0.0).distance(vec3(1.0, 0.0, 0.0)), 5.0);
    }

    #[test]
    fn lerp() {
        let from = vec3(1.0, 2.0, 3.0);
        let to = vec3(3.0, 6.0, -1.0);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 0.5), vec3(2.0, 4.0, 1.0));
        // Extrapolation is allowed.
        assert_eq!(from.lerp(to, 2.0), vec3(5.0, 10.0, -5.0));
        assert_eq!(from.lerp(to, -1.0), vec3(-1.0, -2.0, 7.0));
    }

    #[test]
    fn abs_clamp_min_max() {
        assert_eq!(vec3(-1.0, 2.0, -0.5).abs(), vec3(1.0, 2.0, 0.5));
        assert_eq!(vec3(-1, 2, -3).abs(), vec3(1, 2, 3));

        assert_eq!(vec3(-5.0, 0.5, 5.0).clamp(-1.0, 1.0), vec3(-1.0, 0.5, 1.0));

        let a = vec2(-1.0, 2.0);
        let b = vec2(3.0, f32::NEG_INFINITY);
        assert_eq!(a.min(b), vec2(-1.0, f32::NEG_INFINITY));
        assert_eq!(a.max(b), vec2(3.0, 2.0));
    }

    #[test]
    fn reflect() {
        // A ray going down-right bounces off the floor and continues up-right.
        let incident = vec3(1.0, -1.0, 0.0);
        assert_eq!(incident.reflect(Vec3f::Y), vec3(1.0, 1.0, 0.0));
        // Reflecting twice returns the original vector.
        assert_eq!(incident.reflect(Vec3f::Y).reflect(Vec3f::Y), incident);
    }

    #[test]
    fn refract() {
        // Perpendicular incidence is not bent.
        let down = -Vec3f::Y;
        assert_approx_eq!(down.refract(Vec3f::Y, 0.66), down);

        // Entering a denser medium bends the ray towards the normal.
        let incident = vec2(1.0, -1.0).normalize();
        let bent = incident.refract(Vec2f::Y, 0.66);
        assert_approx_eq!(bent.length(), 1.0).abs(1e-6);
        assert!(bent.x.abs() < incident.x.abs());

        // Shallow exit towards a less dense medium: total internal reflection.
        let shallow = vec2(0.99, -0.14106736).normalize();
        assert_eq!(shallow.refract(Vec2f::Y, 1.5), Vec2f::ZERO);
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
        assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    }

    #[test]
    fn angles() {
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);

        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);

        assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    }
}
