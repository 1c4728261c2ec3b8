//! Builders for the 4x4 homogeneous transforms used by 3-D rendering.
//!
//! All builders follow the right-handed, column-vector convention: a point is transformed with
//! `m * v`, and transforms compose right-to-left (`projection * view * model`). The projection
//! builders map the visible volume into the OpenGL clip space, with depth covering `[-1, 1]`.

use crate::{Matrix, Number, Sqrt, Trig, Vec3};

use super::Mat4;

impl<T: Number> Mat4<T> {
    /// Creates a transform that moves points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Mat4::translation([1.0, 2.0, 3.0]);
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    pub fn translation(offset: impl Into<Vec3<T>>) -> Self {
        let offset = offset.into();
        let mut mat = Self::IDENTITY;
        mat[(0, 3)] = offset.x;
        mat[(1, 3)] = offset.y;
        mat[(2, 3)] = offset.z;
        mat
    }

    /// Creates a transform that scales each axis by the corresponding factor.
    pub fn scaling(factors: impl Into<Vec3<T>>) -> Self {
        let factors = factors.into();
        Matrix::from_diagonal([factors.x, factors.y, factors.z, T::ONE])
    }

    /// Creates a transform that rotates by `radians` around `axis` (counterclockwise when the
    /// axis points at the viewer).
    ///
    /// The axis does not have to be normalized.
    pub fn rotation(axis: impl Into<Vec3<T>>, radians: T) -> Self
    where
        T: Trig + Sqrt,
    {
        let axis = axis.into().normalize();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let c = radians.cos();
        let s = radians.sin();
        let t = T::ONE - c;

        // Rodrigues' rotation formula, written out as a matrix.
        Self::from_rows([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y, T::ZERO],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x, T::ZERO],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a view transform for a camera at `eye` looking towards `target`.
    ///
    /// `up` orients the camera roll and only has to be roughly opposed to gravity; it must not
    /// be parallel to the view direction. The result maps `eye` to the origin, with the camera
    /// looking down the negative Z axis.
    pub fn look_at(
        eye: impl Into<Vec3<T>>,
        target: impl Into<Vec3<T>>,
        up: impl Into<Vec3<T>>,
    ) -> Self
    where
        T: Sqrt,
    {
        let eye = eye.into();
        let forward = (target.into() - eye).normalize();
        let side = forward.cross(up.into()).normalize();
        let up = side.cross(forward);

        Self::from_rows([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a perspective projection with vertical field of view `fov_y` (in radians).
    ///
    /// `aspect` is width divided by height. The view frustum between the `near` and `far`
    /// planes (both positive, along negative Z) is mapped to clip space, with depth `-1` at the
    /// near plane and `1` at the far plane.
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self
    where
        T: Trig,
    {
        let two = T::ONE + T::ONE;
        let f = T::ONE / (fov_y / two).tan();

        let mut mat = Self::ZERO;
        mat[(0, 0)] = f / aspect;
        mat[(1, 1)] = f;
        mat[(2, 2)] = (far + near) / (near - far);
        mat[(2, 3)] = two * far * near / (near - far);
        mat[(3, 2)] = -T::ONE;
        mat
    }

    /// Creates an orthographic projection that maps the axis-aligned box bounded by the six
    /// planes to clip space.
    ///
    /// `near` and `far` are distances along negative Z, like in [`Mat4::perspective`].
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;

        let mut mat = Self::IDENTITY;
        mat[(0, 0)] = two / (right - left);
        mat[(1, 1)] = two / (top - bottom);
        mat[(2, 2)] = -two / (far - near);
        mat[(0, 3)] = -(right + left) / (right - left);
        mat[(1, 3)] = -(top + bottom) / (top - bottom);
        mat[(2, 3)] = -(far + near) / (far - near);
        mat
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    use crate::{assert_approx_eq, vec3, vec4, Mat4f, Vec4f};

    use super::*;

    fn transform_point(m: Mat4f, p: Vec3<f32>) -> Vec3<f32> {
        let out = m * p.extend(1.0);
        out.truncate() / out.w
    }

    #[test]
    fn translation_and_scaling() {
        let m = Mat4f::translation([1.0, 2.0, 3.0]);
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
        // Directions (w = 0) are unaffected by translation.
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));

        let s = Mat4f::scaling([2.0, 3.0, 4.0]);
        assert_eq!(s * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));

        // Inverse of a rigid transform undoes it exactly.
        assert_approx_eq!(m.invert(), Mat4f::translation([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn rotation_about_z() {
        let m = Mat4f::rotation([0.0, 0.0, 1.0], FRAC_PI_2);
        assert_approx_eq!(m * Vec4f::X, Vec4f::Y).abs(1e-6);
        assert_approx_eq!(m * Vec4f::Y, -Vec4f::X).abs(1e-6);
        assert_approx_eq!(m * Vec4f::Z, Vec4f::Z).abs(1e-6);
        assert_approx_eq!(m.determinant(), 1.0).abs(1e-6);
    }

    #[test]
    fn rotation_axis_need_not_be_normalized() {
        let a = Mat4f::rotation([0.0, 0.0, 10.0], 1.0);
        let b = Mat4f::rotation([0.0, 0.0, 1.0], 1.0);
        assert_approx_eq!(a, b).abs(1e-6);
    }

    #[test]
    fn rotation_composes() {
        let quarter = Mat4f::rotation([1.0, 1.0, 0.0], FRAC_PI_2);
        let half = Mat4f::rotation([1.0, 1.0, 0.0], 2.0 * FRAC_PI_2);
        assert_approx_eq!(quarter * quarter, half).abs(1e-6);
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = vec3(2.0, 3.0, 5.0);
        let view = Mat4f::look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);

        assert_approx_eq!(transform_point(view, eye), vec3(0.0, 0.0, 0.0)).abs(1e-5);

        // The target lies straight ahead, on the negative Z axis.
        let target = transform_point(view, vec3(0.0, 0.0, 0.0));
        assert_approx_eq!(target.x, 0.0).abs(1e-5);
        assert_approx_eq!(target.y, 0.0).abs(1e-5);
        assert!(target.z < 0.0);
    }

    #[test]
    fn look_at_down_negative_z_is_identity() {
        let view = Mat4f::look_at([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]);
        assert_approx_eq!(view, Mat4f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn perspective_depth_range() {
        let proj = Mat4f::perspective(FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);

        let near = transform_point(proj, vec3(0.0, 0.0, -0.1));
        assert_approx_eq!(near.z, -1.0).abs(1e-5);

        let far = transform_point(proj, vec3(0.0, 0.0, -100.0));
        assert_approx_eq!(far.z, 1.0).abs(1e-4);
    }

    #[test]
    fn orthographic_maps_corners() {
        let proj = Mat4f::orthographic(-10.0, 10.0, -5.0, 5.0, 1.0, 11.0);

        let min = transform_point(proj, vec3(-10.0, -5.0, -1.0));
        assert_approx_eq!(min, vec3(-1.0, -1.0, -1.0)).abs(1e-6);

        let max = transform_point(proj, vec3(10.0, 5.0, -11.0));
        assert_approx_eq!(max, vec3(1.0, 1.0, 1.0)).abs(1e-6);

        let center = transform_point(proj, vec3(0.0, 0.0, -6.0));
        assert_approx_eq!(center, vec3(0.0, 0.0, 0.0)).abs(1e-6);
    }

    #[test]
    fn composed_transform_inverts() {
        let model = Mat4f::translation([1.0, 2.0, 3.0])
            * Mat4f::rotation([0.0, 1.0, 0.0], 0.7)
            * Mat4f::scaling([2.0, 2.0, 2.0]);
        assert_approx_eq!(model * model.invert(), Mat4f::IDENTITY).abs(1e-5);
        assert_approx_eq!(model.invert() * model, Mat4f::IDENTITY).abs(1e-5);
    }
}
